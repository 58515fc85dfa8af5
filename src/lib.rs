//! Endpoint Latency Monitor
//!
//! Periodically probes a configured set of HTTP(S) endpoints, measures
//! round-trip time, and emits one metric line per completed probe on stdout
//! for an external metrics pipeline to scrape.
//!
//! ```text
//! config file (TOML)
//!     → config:: (parse, validate, normalize intervals)
//!     → probe::ProbeRequest (one prepared descriptor per endpoint)
//!     → scheduler::Scheduler (global tick, per-endpoint due check)
//!         → probe::execute (concurrent, one task per due endpoint)
//!             → observability::metrics (HTTP_RESPONSETIME <ms> <source>)
//! ```
//!
//! Stdout carries only metric lines; all diagnostics go to stderr via
//! `tracing`.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod scheduler;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use scheduler::Scheduler;
