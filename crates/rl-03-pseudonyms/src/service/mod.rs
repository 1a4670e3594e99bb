//! Service layer for pseudonyms

pub mod pseudonym_generator;

pub use pseudonym_generator::{PseudonymGenerator, NONCE_LENGTH};
