//! Matching configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use rl_02_record_linkage::domain::{MatchConfigBuilder, MatchStrategy};
//!
//! let config = MatchConfigBuilder::new()
//!     .strategy(MatchStrategy::Median)
//!     .positive_match_threshold(0.9)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use super::strategy::MatchStrategy;
use crate::error::LinkageError;

/// Default acceptance threshold.
pub const DEFAULT_POSITIVE_MATCH_THRESHOLD: f64 = 0.95;

/// Matcher configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchConfig {
    /// Aggregation over cluster members
    pub match_strategy: MatchStrategy,
    /// Minimum score (inclusive) to join a cluster
    pub positive_match_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_strategy: MatchStrategy::Min,
            positive_match_threshold: DEFAULT_POSITIVE_MATCH_THRESHOLD,
        }
    }
}

impl MatchConfig {
    pub fn new(strategy: MatchStrategy, threshold: f64) -> Result<Self, LinkageError> {
        let config = Self {
            match_strategy: strategy,
            positive_match_threshold: threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// The threshold must be a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<(), LinkageError> {
        let threshold = self.positive_match_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(LinkageError::InvalidThreshold { threshold });
        }
        Ok(())
    }

    /// Whether `score` is accepted.
    pub fn accepts(&self, score: f64) -> bool {
        score >= self.positive_match_threshold
    }

    /// Builder-style method to set the strategy
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    /// Builder-style method to set the threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.positive_match_threshold = threshold;
        self
    }
}

/// Builder for MatchConfig with validation
#[derive(Default)]
pub struct MatchConfigBuilder {
    match_strategy: Option<MatchStrategy>,
    positive_match_threshold: Option<f64>,
}

impl MatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = Some(strategy);
        self
    }

    pub fn positive_match_threshold(mut self, threshold: f64) -> Self {
        self.positive_match_threshold = Some(threshold);
        self
    }

    /// Build the MatchConfig, validating the threshold
    pub fn build(self) -> Result<MatchConfig, LinkageError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> MatchConfig {
        let defaults = MatchConfig::default();

        MatchConfig {
            match_strategy: self.match_strategy.unwrap_or(defaults.match_strategy),
            positive_match_threshold: self
                .positive_match_threshold
                .unwrap_or(defaults.positive_match_threshold),
        }
    }
}
