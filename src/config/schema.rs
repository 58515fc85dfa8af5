//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the config file.
//! Interval handling mirrors the behavior downstream consumers rely on:
//! per-endpoint intervals are given in seconds, scaled to milliseconds, and
//! floored at one second in case the value was entered in the wrong units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default global tick cadence in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 1_000;

/// Default per-endpoint poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 5.0;

/// Minimum effective per-endpoint interval in milliseconds.
pub const MIN_POLL_INTERVAL_MS: u64 = 1_000;

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Global tick cadence in milliseconds.
    pub poll_interval_ms: u64,

    /// Endpoints to poll. An absent list is a fatal startup error; an empty
    /// list is a valid monitor that ticks forever doing nothing.
    pub items: Option<Vec<EndpointConfig>>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_TICK_MS,
            items: None,
        }
    }
}

impl MonitorConfig {
    /// Global tick cadence. A zero value recovers to the default.
    pub fn tick_interval(&self) -> Duration {
        let ms = if self.poll_interval_ms == 0 {
            DEFAULT_TICK_MS
        } else {
            self.poll_interval_ms
        };
        Duration::from_millis(ms)
    }
}

/// One endpoint to probe.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Unique identifier reported in the metric line.
    pub source: String,

    /// URL scheme, `http` or `https`.
    #[serde(default = "default_protocol")]
    pub protocol: String,

    /// Host and path, joined with the protocol as `{protocol}://{url}`.
    pub url: String,

    /// HTTP method for the probe.
    #[serde(default = "default_method")]
    pub method: String,

    /// Optional `key=value` pairs sent as a JSON object body.
    #[serde(default)]
    pub postdata: Vec<String>,

    /// Optional basic-auth username, sent preemptively.
    #[serde(default)]
    pub username: Option<String>,

    /// Basic-auth password; ignored without `username`.
    #[serde(default)]
    pub password: Option<String>,

    /// Poll interval in seconds.
    #[serde(default)]
    pub poll_interval: PollInterval,

    /// Treat non-2xx statuses as success.
    #[serde(default)]
    pub ignore_status_code: bool,

    /// Surface this endpoint's probe diagnostics in the log stream.
    #[serde(default)]
    pub debug: bool,
}

fn default_protocol() -> String {
    "http".to_string()
}

fn default_method() -> String {
    "GET".to_string()
}

/// Per-endpoint poll interval as written in the config file.
///
/// Accepts a TOML number or a numeric string; anything unusable falls back
/// to [`DEFAULT_POLL_INTERVAL_SECS`] at normalization time rather than
/// failing the load.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PollInterval {
    Seconds(f64),
    Text(String),
}

impl Default for PollInterval {
    fn default() -> Self {
        PollInterval::Seconds(DEFAULT_POLL_INTERVAL_SECS)
    }
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollInterval::Seconds(n) => write!(f, "{}", n),
            PollInterval::Text(s) => write!(f, "{}", s),
        }
    }
}

impl EndpointConfig {
    /// Parsed per-endpoint interval in seconds, if usable.
    pub fn interval_secs(&self) -> Option<f64> {
        let secs = match &self.poll_interval {
            PollInterval::Seconds(n) => Some(*n),
            PollInterval::Text(s) => s.trim().parse::<f64>().ok(),
        };
        secs.filter(|n| n.is_finite() && *n > 0.0)
    }

    /// Effective poll interval: seconds scaled to milliseconds, with
    /// unusable values recovering to the default and everything floored at
    /// [`MIN_POLL_INTERVAL_MS`].
    pub fn effective_interval(&self) -> Duration {
        let secs = self.interval_secs().unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
        let ms = (secs * 1_000.0) as u64;
        Duration::from_millis(ms.max(MIN_POLL_INTERVAL_MS))
    }

    /// Full probe URL.
    pub fn uri(&self) -> String {
        format!("{}://{}", self.protocol, self.url)
    }
}
