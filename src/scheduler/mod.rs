//! Scheduling subsystem.
//!
//! # Data Flow
//! ```text
//! Global ticker (driver.rs):
//!     Fixed-cadence tick
//!     → evaluate every endpoint against its own interval (state.rs)
//!     → dispatch a probe task for each endpoint that is due
//!     → re-arm immediately, never waiting on in-flight probes
//! ```
//!
//! # Design Decisions
//! - The tick step is the sole writer of all schedule state; probe tasks
//!   only read their immutable descriptor, so no locking is needed
//! - `last_polled_at` is set to "now" at dispatch, not to the previous
//!   deadline: intervals measure elapsed wall time since launch, which
//!   rules out catch-up bursts after a stall
//! - At most one probe per endpoint is in flight at any time; a slow probe
//!   defers that endpoint's next fire instead of stacking a second probe

pub mod driver;
pub mod state;

pub use driver::Scheduler;
pub use state::EndpointState;
