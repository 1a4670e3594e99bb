//! # Error Types
//!
//! Errors raised while moving record vectors across organization boundaries.

use thiserror::Error;

/// Errors decoding a transferred record vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterchangeError {
    /// The transfer string is not valid Base64.
    #[error("Invalid Base64 record vector: {0}")]
    InvalidBase64(String),

    /// The decoded vector carries set bits beyond the expected length.
    #[error("Record vector too long: {actual_bytes} bytes exceed {expected_bits} bits")]
    VectorTooLong {
        expected_bits: usize,
        actual_bytes: usize,
    },

    /// The declared length exceeds [`MAX_RECORD_BITS`](crate::MAX_RECORD_BITS).
    #[error("Record length {length} exceeds {max} bits")]
    LengthTooLarge { length: usize, max: usize },
}
