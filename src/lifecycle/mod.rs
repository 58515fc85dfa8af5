//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → fatal endpoint-list check → build scheduler → run
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → scheduler exits its tick loop → process exits 0
//! ```
//!
//! # Design Decisions
//! - Fail fast: the missing-endpoint-list check runs before any polling and
//!   exits with status 1
//! - In-flight probes are not cancelled on shutdown; they are left to
//!   complete or time out (probes are stateless and idempotent)

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
