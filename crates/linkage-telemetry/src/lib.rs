//! # Linkage Telemetry
//!
//! Structured logging for the record-linkage tools, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkage_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(&TelemetryConfig::from_env())?;
//!     // Spans and events of all crates are now emitted
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RL_SERVICE_NAME` | `record-linkage` | Service name in the startup record |
//! | `RL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `RL_JSON_LOGS` | `false` | JSON formatted output |
//!
//! Identifying data and key material are never logged by the linkage crates;
//! only counts, lengths and organization ids appear in records.

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::{env_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
