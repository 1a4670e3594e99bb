//! # Linkage Runtime
//!
//! Command line runtime for a linkage run.
//!
//! ## Roles
//!
//! - **Data holder**: `keygen` (once per run, shared out of band), `encode`
//!   (identifying data to a transfer batch).
//! - **Trusted linkage party**: `link` (transfer batches to clusters, or to
//!   pseudonyms with `--study-id`).
//!
//! ## Modules
//!
//! - `config/` - Non-secret configuration file
//! - `secrets/` - Key material from the environment
//! - `adapters/` - JSON file adapters
//! - `commands/` - Subcommand implementations

pub mod adapters;
pub mod commands;
pub mod config;
pub mod secrets;

pub use commands::{encode, link, LinkSummary, PseudonymSettings};
pub use config::RuntimeConfig;
pub use secrets::GeneratedKeys;
