//! Error types for the Bloom filter encoding subsystem

use thiserror::Error;

use crate::domain::HasherAlgorithm;

/// Configuration errors raised while setting up or running an encoder.
///
/// All variants are fatal: the encoder is deterministic, so a failure is a
/// caller configuration problem and is never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    #[error("Field weight out of range: {weight} (must be between 0 and 1)")]
    WeightOutOfRange { weight: f64 },

    #[error("Sum of field weights exceeds 1: {sum}")]
    WeightSumExceeded { sum: f64 },

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("A record Bloom filter needs at least one field filter")]
    NoFields,

    #[error("Hash algorithm {algorithm} requires key material")]
    MissingKeys { algorithm: HasherAlgorithm },

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Identifying data provider error: {0}")]
    Provider(String),
}
