//! Domain Layer - Pure matching logic
//!
//! This layer contains:
//! - Persons and matched persons
//! - Dice similarity
//! - Match strategies
//! - Candidate-to-cluster matching
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - Clusters are never empty

pub mod config;
pub mod matching;
pub mod person;
pub mod strategy;

pub use config::{MatchConfig, MatchConfigBuilder, DEFAULT_POSITIVE_MATCH_THRESHOLD};
pub use matching::{best_match, BestMatch};
pub use person::{MatchedPerson, Person};
pub use strategy::{Aggregation, MatchStrategy};
