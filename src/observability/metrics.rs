//! Metric line emission.
//!
//! One line per completed probe:
//!
//! ```text
//! HTTP_RESPONSETIME <duration_ms> <source>
//! ```
//!
//! `duration_ms` is a non-negative integer on success and exactly `-1` when
//! the endpoint is considered down. This literal format is a compatibility
//! contract with the downstream metrics consumer scraping stdout.

use crate::probe::{ProbeOutcome, ProbeResult};

/// Metric name emitted for every completed probe.
pub const METRIC_NAME: &str = "HTTP_RESPONSETIME";

/// Destination for metric lines.
///
/// The production sink writes to stdout; tests substitute a capturing sink.
pub trait MetricSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Production sink: one metric line per completed probe on stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl MetricSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Format the metric line for a completed probe.
pub fn format_line(result: &ProbeResult) -> String {
    format!("{} {} {}", METRIC_NAME, result.metric_value(), result.source)
}

/// Emit exactly one metric line for a completed probe.
///
/// Failure diagnostics are surfaced only when the endpoint's debug flag is
/// set; the metric line itself is emitted unconditionally.
pub fn report(sink: &dyn MetricSink, result: &ProbeResult, debug: bool) {
    if debug {
        if let ProbeOutcome::Down {
            error,
            status,
            body,
        } = &result.outcome
        {
            tracing::error!(
                source = %result.source,
                error = ?error,
                status = ?status,
                body = ?body,
                "probe failed"
            );
        }
    }

    tracing::debug!(
        source = %result.source,
        value = result.metric_value(),
        "probe completed"
    );

    sink.emit(&format_line(result));
}
