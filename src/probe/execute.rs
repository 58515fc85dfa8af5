//! Probe execution.

use reqwest::Client;
use tokio::time::Instant;

use crate::probe::request::ProbeRequest;
use crate::probe::types::{ProbeOutcome, ProbeResult};

/// Issue one probe and classify the outcome.
///
/// The wall clock runs from just before the request is sent until the full
/// response body has been read, so connect, TLS handshake, and transfer time
/// all count toward the reported duration. The client's timeout ceiling
/// bounds the whole round trip.
///
/// Never returns an error: transport failures, timeouts, body-read failures,
/// and rejected status codes all fold into [`ProbeOutcome::Down`].
pub async fn execute(client: &Client, probe: &ProbeRequest) -> ProbeResult {
    let mut request = client.request(probe.method.clone(), probe.url.as_str());
    if let Some(body) = &probe.body {
        request = request.json(body);
    }
    if let Some(auth) = &probe.auth {
        request = request.basic_auth(&auth.username, Some(&auth.password));
    }

    let started = Instant::now();
    let outcome = match request.send().await {
        Ok(response) => {
            let status = response.status();
            match response.text().await {
                Ok(body) => {
                    let duration = started.elapsed();
                    if probe.ignore_status_code || status.is_success() {
                        ProbeOutcome::Up {
                            duration_ms: duration.as_millis() as u64,
                        }
                    } else {
                        ProbeOutcome::Down {
                            error: None,
                            status: Some(status),
                            body: Some(body),
                        }
                    }
                }
                Err(e) => ProbeOutcome::Down {
                    error: Some(e.to_string()),
                    status: Some(status),
                    body: None,
                },
            }
        }
        Err(e) => ProbeOutcome::Down {
            error: Some(e.to_string()),
            status: e.status(),
            body: None,
        },
    };

    ProbeResult {
        source: probe.source.clone(),
        outcome,
        completed_at: Instant::now(),
    }
}
