//! Error types for the pseudonym subsystem

use thiserror::Error;

/// Errors raised while creating or decoding pseudonyms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PseudonymError {
    #[error("Invalid research study key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Person of organization {organization} has no local id")]
    MissingLocalId { organization: String },

    #[error("Pseudonym is not valid Base64: {0}")]
    Encoding(String),

    #[error("Pseudonym is too short: {0} bytes")]
    Truncated(usize),

    #[error("Encryption failed")]
    EncryptionFailed,

    /// Wrong key, wrong research study or tampered ciphertext
    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Pseudonym payload error: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for PseudonymError {
    fn from(err: serde_json::Error) -> Self {
        PseudonymError::Payload(err.to_string())
    }
}

impl From<base64::DecodeError> for PseudonymError {
    fn from(err: base64::DecodeError) -> Self {
        PseudonymError::Encoding(err.to_string())
    }
}
