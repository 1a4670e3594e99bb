//! # Runtime Configuration
//!
//! Non-secret parameters, loaded from an optional JSON file:
//!
//! ```json
//! {
//!   "encoding": { "fieldLength": [...], "fieldWeight": [...], "recordLength": 2000 },
//!   "matching": { "matchStrategy": "MIN", "positiveMatchThreshold": 0.95 }
//! }
//! ```
//!
//! Secrets never come from this file; see [`crate::secrets`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rl_01_bloom_encoding::EncodingConfig;
use rl_02_record_linkage::MatchConfig;
use serde::{Deserialize, Serialize};

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeConfig {
    /// Encoder parameters, shared by every data holder of a linkage run.
    pub encoding: EncodingConfig,
    /// Matcher parameters of the trusted party.
    pub matching: MatchConfig,
}

impl RuntimeConfig {
    /// Load from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.encoding
            .validate()
            .context("Invalid encoding configuration")?;
        self.matching
            .validate()
            .context("Invalid matching configuration")?;
        Ok(())
    }
}
