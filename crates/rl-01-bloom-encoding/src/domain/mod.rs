//! Domain Layer - Pure encoding logic
//!
//! This layer contains:
//! - Bigram hash functions and double hashing
//! - Field Bloom filters
//! - Record Bloom filter composition
//! - Record generation for identifying data
//! - Parameter calculations
//! - Configuration and key material
//!
//! RULES:
//! - No I/O operations
//! - No shared mutable state; hashers are owned by their caller

pub mod config;
pub mod field_filter;
pub mod hash_functions;
pub mod parameters;
pub mod record_filter;
pub mod record_generator;

pub use config::{
    BloomFilterKeys, EncodingConfig, EncodingConfigBuilder, FieldLengths, FieldWeights,
    BLOOM_FILTER_KEYS_LENGTH, DEFAULT_RECORD_LENGTH, HASH_KEY_LENGTH,
};
pub use field_filter::{FieldBits, FieldBloomFilter, FieldBloomFilterGenerator};
pub use hash_functions::{
    compute_hash_positions, to_bigrams, BiGramHasher, BiGramHasherFactory, HasherAlgorithm,
    HmacSha256HmacSha3BiGramHasher, Sha256Sha3BiGramHasher, NUMBER_OF_HASH_FUNCTIONS,
};
pub use parameters::{
    check_record_length, derive_record_length, max_field_cardinality, sample_count,
    MAX_RECORD_LENGTH,
};
pub use record_filter::RecordBloomFilter;
pub use record_generator::RecordBloomFilterGenerator;
