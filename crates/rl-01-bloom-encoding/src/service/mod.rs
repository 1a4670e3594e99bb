//! Service Layer
//!
//! Orchestrates the domain logic: one hasher per worker, batch encoding,
//! metrics and tracing.

pub mod encoding_service;

pub use encoding_service::{RecordEncodingService, PARALLEL_THRESHOLD};
