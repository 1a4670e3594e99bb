//! # RL-02 Record Linkage
//!
//! Threshold clustering of record vectors at the trusted linkage party.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure matching logic, no I/O
//!   - `Person`, `MatchedPerson`: Encoded persons and non-empty clusters
//!   - `MatchStrategy`: FIRST, LAST, MAX, MIN, AVG, MEDIAN aggregation
//!   - `MatchConfig`, `MatchConfigBuilder`: Strategy and threshold
//!   - `best_match`: Candidate-to-cluster selection
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `RecordLinkageApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `SingleOrganizationMatcher`: Sequential deduplication fold
//!   - `FederatedMatcher`: Largest-list-first linkage, parallel per list
//!   - `LinkageService`: Implements `RecordLinkageApi`
//!
//! ## Invariants
//!
//! - **Dice similarity**: `2|A∩B| / (|A|+|B|)`, 1.0 for identical non-empty vectors.
//! - **Inclusive threshold**: a score equal to the threshold is accepted.
//! - **Deterministic ties**: equal best scores go to the lowest cluster index.
//! - **Completeness**: every input person ends up in exactly one cluster.
//!
//! ## Usage Example
//!
//! ```ignore
//! use rl_02_record_linkage::{LinkageService, MatchConfig, RecordLinkageApi};
//!
//! let service = LinkageService::new(MatchConfig::default())?;
//! let clusters = service.match_federated(vec![persons_org_a, persons_org_b]);
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    best_match, BestMatch, MatchConfig, MatchConfigBuilder, MatchStrategy, MatchedPerson, Person,
    DEFAULT_POSITIVE_MATCH_THRESHOLD,
};
pub use error::LinkageError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::RecordLinkageApi;
pub use service::{FederatedMatcher, LinkageService, SingleOrganizationMatcher};
