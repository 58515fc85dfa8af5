//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Flag entries whose values will be recovered to defaults
//! - Detect source identifiers that will collide in the metric stream
//!
//! # Design Decisions
//! - Returns all findings, not just the first
//! - Nothing here is fatal: a questionable entry degrades that endpoint,
//!   never the process

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::EndpointConfig;

/// Non-fatal finding about an endpoint entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Entry has an empty `source`; its metric lines will be unattributable.
    EmptySource { index: usize },
    /// Two entries share a `source`; both are scheduled independently and
    /// their metric lines are indistinguishable.
    DuplicateSource { source: String },
    /// `poll_interval` is not a positive number; the default applies.
    IntervalFallback { source: String, raw: String },
    /// `protocol` is neither http nor https; every probe will likely fail.
    UnknownProtocol { source: String, protocol: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::EmptySource { index } => {
                write!(f, "item {} has an empty source", index)
            }
            ValidationWarning::DuplicateSource { source } => {
                write!(f, "duplicate source '{}'", source)
            }
            ValidationWarning::IntervalFallback { source, raw } => {
                write!(
                    f,
                    "'{}': poll_interval '{}' is not a positive number, using default",
                    source, raw
                )
            }
            ValidationWarning::UnknownProtocol { source, protocol } => {
                write!(f, "'{}': unknown protocol '{}'", source, protocol)
            }
        }
    }
}

/// Check endpoint entries, returning every finding.
pub fn check_items(items: &[EndpointConfig]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        if item.source.is_empty() {
            warnings.push(ValidationWarning::EmptySource { index });
        } else if !seen.insert(item.source.clone()) {
            warnings.push(ValidationWarning::DuplicateSource {
                source: item.source.clone(),
            });
        }

        if item.interval_secs().is_none() {
            warnings.push(ValidationWarning::IntervalFallback {
                source: item.source.clone(),
                raw: item.poll_interval.to_string(),
            });
        }

        if !matches!(item.protocol.as_str(), "http" | "https") {
            warnings.push(ValidationWarning::UnknownProtocol {
                source: item.source.clone(),
                protocol: item.protocol.clone(),
            });
        }
    }

    warnings
}
