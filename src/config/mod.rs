//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, logged as warnings)
//!     → MonitorConfig (normalized, immutable)
//!     → one ProbeRequest + EndpointState per item
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reconfiguration
//! - Validation separates syntactic (serde) from semantic checks
//! - Semantic findings degrade a single endpoint, never the process; the
//!   only fatal configuration error is an absent endpoint list, checked at
//!   startup before the scheduler exists

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::EndpointConfig;
pub use schema::MonitorConfig;
