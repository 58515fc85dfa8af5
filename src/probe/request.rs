//! Prepared probe requests and HTTP client construction.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::{Map, Value};

use crate::config::EndpointConfig;

/// Fixed User-Agent sent with every probe.
pub const USER_AGENT: &str = "endpoint-monitor/0.1";

/// Probe timeout ceiling, covering connect, TLS, and transfer.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(20);

/// Basic-auth credentials, sent preemptively.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable request descriptor for one endpoint, built once at startup and
/// shared by every probe of that endpoint.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    /// Endpoint identifier reported in the metric line.
    pub source: String,
    pub method: Method,
    /// Full URL, `{protocol}://{url}`. Kept as a string: an unusable URL is
    /// a per-probe failure, not a startup error.
    pub url: String,
    /// JSON object body, when `postdata` pairs were configured.
    pub body: Option<Map<String, Value>>,
    pub auth: Option<Credentials>,
    /// Treat non-2xx statuses as success.
    pub ignore_status_code: bool,
    /// Surface probe diagnostics in the log stream.
    pub debug: bool,
}

impl ProbeRequest {
    /// Build a descriptor from config. Never fails: an unknown method is
    /// recovered to GET with a warning.
    pub fn from_config(config: &EndpointConfig) -> Self {
        let method = match Method::from_bytes(config.method.to_uppercase().as_bytes()) {
            Ok(method) => method,
            Err(_) => {
                tracing::warn!(
                    source = %config.source,
                    method = %config.method,
                    "unknown HTTP method, using GET"
                );
                Method::GET
            }
        };

        let body = parse_postdata(&config.postdata);
        let auth = config.username.clone().map(|username| Credentials {
            username,
            password: config.password.clone().unwrap_or_default(),
        });

        Self {
            source: config.source.clone(),
            method,
            url: config.uri(),
            body: if body.is_empty() { None } else { Some(body) },
            auth,
            ignore_status_code: config.ignore_status_code,
            debug: config.debug,
        }
    }
}

/// Split `key=value` pairs into a JSON object. A pair without `=` becomes a
/// key with an empty value; empty pairs are skipped.
fn parse_postdata(pairs: &[String]) -> Map<String, Value> {
    let mut map = Map::new();
    for pair in pairs {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((key, value)) => {
                map.insert(key.to_string(), Value::String(value.to_string()));
            }
            None => {
                map.insert(pair.clone(), Value::String(String::new()));
            }
        }
    }
    map
}

/// Shared HTTP client for all probes: fixed User-Agent, certificate
/// validation disabled, fixed timeout ceiling.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(true)
        .timeout(PROBE_TIMEOUT)
        .build()
}
