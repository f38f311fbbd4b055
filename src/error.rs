//! Error types for SIREN
//!
//! The simulation itself is total: generation returns `Option`, never an
//! error. The fallible surface is limited to operator-facing parsing and
//! feed lookups.

use thiserror::Error;

/// Result type alias for SIREN operations
pub type Result<T> = std::result::Result<T, SirenError>;

/// Main error type for SIREN operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SirenError {
    /// Scenario name outside the closed set
    #[error("Unknown scenario: {0:?}")]
    UnknownScenario(String),

    /// Alert kind name outside the closed set
    #[error("Unknown alert kind: {0:?}")]
    UnknownAlertKind(String),

    /// Alert id not present in the feed
    #[error("Unknown alert id: {0}")]
    UnknownAlertId(String),
}
