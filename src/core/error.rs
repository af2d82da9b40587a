//! Error types for the planning core
//!
//! Only programmer-level misuse is surfaced as an error. User-input edge
//! cases (empty query, all courses completed, no conflict-free schedule)
//! are empty results, and malformed handoff payloads decode to defaults.

use std::error::Error;
use std::fmt;

/// Errors returned by the roadmap generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The requested major does not exist in the catalog
    MajorNotFound(String),
    /// A term capacity of zero courses can never hold a plan
    InvalidTermCapacity(usize),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MajorNotFound(name) => {
                write!(f, "Major '{name}' not found in catalog")
            }
            Self::InvalidTermCapacity(capacity) => {
                write!(f, "Invalid term capacity: {capacity} (must be at least 1)")
            }
        }
    }
}

impl Error for PlanError {}
