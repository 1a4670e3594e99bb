//! Error types for the record linkage subsystem

use shared_types::InterchangeError;
use thiserror::Error;

/// Errors that can occur while setting up or feeding the matchers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkageError {
    #[error("Invalid positive match threshold: {threshold} (must be between 0 and 1)")]
    InvalidThreshold { threshold: f64 },

    #[error("Unknown match strategy: {0}")]
    UnknownStrategy(String),

    #[error("A matched person needs at least one member")]
    EmptyCluster,

    #[error("Interchange error: {0}")]
    Interchange(#[from] InterchangeError),
}
