//! Probe subsystem.
//!
//! # Data Flow
//! ```text
//! EndpointConfig
//!     → request.rs (ProbeRequest, built once at startup)
//!     → execute.rs (one HTTP round trip, wall time measured)
//!     → types.rs (ProbeResult: Up with duration, or Down)
//!     → metric sink (exactly one line per completed probe)
//! ```
//!
//! # Design Decisions
//! - Descriptor construction is infallible: an unknown method recovers to
//!   GET, an unusable URL surfaces as a per-probe failure rather than a
//!   startup error
//! - Wall time covers connect, TLS handshake, and full body transfer
//! - Execution never propagates an error to the scheduler; every failure
//!   mode folds into a `Down` outcome

pub mod execute;
pub mod request;
pub mod types;

pub use execute::execute;
pub use request::{build_client, ProbeRequest, PROBE_TIMEOUT, USER_AGENT};
pub use types::{ProbeOutcome, ProbeResult, SITE_IS_DOWN};
