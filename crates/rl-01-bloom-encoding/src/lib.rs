//! # RL-01 Bloom Encoding
//!
//! Privacy-preserving encoding of identifying data into record-level Bloom
//! filters at each data holder.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure encoding logic, no I/O
//!   - `BiGramHasher`: Keyed or unkeyed digest pair over bigrams
//!   - `FieldBloomFilterGenerator`: Attribute value to field bit vector
//!   - `RecordBloomFilter`: Weighted, permuted composition of field filters
//!   - `RecordBloomFilterGenerator`: Full record encoding for an `Idat`
//!   - `EncodingConfig`, `EncodingConfigBuilder`: Validated configuration
//!   - `BloomFilterKeys`: Permutation seed and HMAC keys, zeroized on drop
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `RecordEncodingApi`: Driving port (inbound API)
//!   - `IdatProvider`: Driven port (data holder's record store)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `RecordEncodingService`: Implements `RecordEncodingApi`, parallel batches
//!
//! - **Adapters Layer** (`adapters/`):
//!   - `InMemoryIdatProvider`: Records already held in memory
//!
//! ## Invariants
//!
//! - **Determinism**: identical value, keys, lengths, weights and seed give a
//!   bit-identical record vector at every organization.
//! - **Per-field weights**: every field is sampled with its own weight,
//!   `round(L_r * w_f)` bits, read cyclically from the field vector.
//! - **No sharing of hashers**: each worker owns its hasher.
//! - Attribute values and key material are never logged.
//!
//! ## Usage Example
//!
//! ```ignore
//! use rl_01_bloom_encoding::{BloomFilterKeys, EncodingConfig, RecordEncodingApi, RecordEncodingService};
//!
//! let keys = BloomFilterKeys::from_bytes(&key_material)?;
//! let config = EncodingConfig::default().with_permutation_seed(keys.permutation_seed());
//! let service = RecordEncodingService::new(config, Some(&keys))?;
//!
//! let record = service.generate_record(&idat)?;
//! let transfer = record.to_base64();
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::InMemoryIdatProvider;
pub use domain::{
    BiGramHasher, BiGramHasherFactory, BloomFilterKeys, EncodingConfig, EncodingConfigBuilder,
    FieldBits, FieldBloomFilter, FieldBloomFilterGenerator, FieldLengths, FieldWeights,
    HasherAlgorithm, RecordBloomFilter, RecordBloomFilterGenerator, NUMBER_OF_HASH_FUNCTIONS,
};
pub use error::EncodingError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{IdatProvider, LocalIdat, RecordEncodingApi};
pub use service::RecordEncodingService;
