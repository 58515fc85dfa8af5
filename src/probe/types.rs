//! Probe outcome types.

use reqwest::StatusCode;
use tokio::time::Instant;

/// Sentinel metric value reported when an endpoint is considered down.
pub const SITE_IS_DOWN: i64 = -1;

/// Classification of one completed probe.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// Response received and accepted.
    Up {
        /// Round-trip duration in milliseconds.
        duration_ms: u64,
    },
    /// Transport error, timeout, or rejected status code.
    Down {
        /// Transport-level error, if any.
        error: Option<String>,
        /// Response status, when a response arrived at all.
        status: Option<StatusCode>,
        /// Response body, when one was read.
        body: Option<String>,
    },
}

/// Result of one dispatched probe.
///
/// Transient: produced by the probe task and consumed immediately by the
/// metric sink, never persisted.
#[derive(Debug)]
pub struct ProbeResult {
    /// Endpoint identifier the result belongs to.
    pub source: String,
    pub outcome: ProbeOutcome,
    /// When the probe completed.
    pub completed_at: Instant,
}

impl ProbeResult {
    /// Value reported in the metric line: duration in milliseconds, or
    /// [`SITE_IS_DOWN`] when the probe failed.
    pub fn metric_value(&self) -> i64 {
        match &self.outcome {
            ProbeOutcome::Up { duration_ms } => *duration_ms as i64,
            ProbeOutcome::Down { .. } => SITE_IS_DOWN,
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Up { .. })
    }
}
