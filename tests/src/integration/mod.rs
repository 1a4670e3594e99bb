//! Cross-crate integration tests.

pub mod federated;
pub mod flows;
pub mod properties;
