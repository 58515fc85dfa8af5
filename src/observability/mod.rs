//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe tasks produce:
//!     → metrics.rs (HTTP_RESPONSETIME lines, stdout)
//!     → logging.rs (structured diagnostics via tracing, stderr)
//! ```
//!
//! # Design Decisions
//! - Stdout carries metric lines only; the line format is a compatibility
//!   contract with the downstream consumer
//! - All tracing output goes to stderr so the metric stream stays
//!   machine-parseable
//! - Per-probe diagnostics are surfaced only for debug-enabled endpoints

pub mod logging;
pub mod metrics;

pub use metrics::{MetricSink, StdoutSink};
