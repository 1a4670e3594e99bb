//! Encoding configuration and key material
//!
//! # Example
//!
//! ```ignore
//! use rl_01_bloom_encoding::domain::EncodingConfigBuilder;
//! use shared_types::IdatField;
//!
//! let config = EncodingConfigBuilder::new()
//!     .field_weight(IdatField::FirstName, 0.15)
//!     .field_weight(IdatField::Country, 0.15)
//!     .record_length(2000)
//!     .permutation_seed(42)
//!     .build()?;
//! ```

use std::fmt;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use shared_types::{IdatField, IDAT_FIELD_COUNT};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::hash_functions::HasherAlgorithm;
use super::parameters::{check_record_length, check_weight_sum, derive_record_length};
use crate::error::EncodingError;

/// Default record vector length in bits.
pub const DEFAULT_RECORD_LENGTH: usize = 2000;

/// Length of one HMAC key in bytes.
pub const HASH_KEY_LENGTH: usize = 32;

/// Serialized [`BloomFilterKeys`]: 8-byte seed plus two hash keys.
pub const BLOOM_FILTER_KEYS_LENGTH: usize = 8 + 2 * HASH_KEY_LENGTH;

/// Per-field bit vector lengths, indexed in composition order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldLengths([usize; IDAT_FIELD_COUNT]);

impl Default for FieldLengths {
    fn default() -> Self {
        Self([500, 500, 250, 50, 500, 250, 500, 500, 500])
    }
}

impl FieldLengths {
    pub fn new(lengths: [usize; IDAT_FIELD_COUNT]) -> Self {
        Self(lengths)
    }

    pub fn get(&self, field: IdatField) -> usize {
        self.0[field.index()]
    }

    pub fn set(&mut self, field: IdatField, length: usize) {
        self.0[field.index()] = length;
    }

    pub fn iter(&self) -> impl Iterator<Item = (IdatField, usize)> + '_ {
        IdatField::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

/// Per-field weights, indexed in composition order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldWeights([f64; IDAT_FIELD_COUNT]);

impl Default for FieldWeights {
    fn default() -> Self {
        Self([0.1, 0.1, 0.1, 0.2, 0.05, 0.1, 0.05, 0.2, 0.1])
    }
}

impl FieldWeights {
    pub fn new(weights: [f64; IDAT_FIELD_COUNT]) -> Self {
        Self(weights)
    }

    pub fn get(&self, field: IdatField) -> f64 {
        self.0[field.index()]
    }

    pub fn set(&mut self, field: IdatField, weight: f64) {
        self.0[field.index()] = weight;
    }

    pub fn iter(&self) -> impl Iterator<Item = (IdatField, f64)> + '_ {
        IdatField::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Record Bloom filter configuration.
///
/// Must be identical at every organization taking part in a linkage run,
/// otherwise the record vectors are not comparable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncodingConfig {
    /// Bit vector length per field
    #[serde(rename = "fieldLength")]
    pub field_lengths: FieldLengths,
    /// Share of the record vector per field, summing to at most 1
    #[serde(rename = "fieldWeight")]
    pub field_weights: FieldWeights,
    /// Record length; derived from field lengths and weights when `None`
    pub record_length: Option<usize>,
    /// Seed of the record permutation
    pub permutation_seed: i64,
    /// Bigram digest pair
    pub hasher: HasherAlgorithm,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            field_lengths: FieldLengths::default(),
            field_weights: FieldWeights::default(),
            record_length: Some(DEFAULT_RECORD_LENGTH),
            permutation_seed: 0,
            hasher: HasherAlgorithm::default(),
        }
    }
}

impl EncodingConfig {
    /// Validate weights and lengths.
    pub fn validate(&self) -> Result<(), EncodingError> {
        for (field, length) in self.field_lengths.iter() {
            if length == 0 {
                return Err(EncodingError::InvalidLength(format!(
                    "field length of {} cannot be 0",
                    field
                )));
            }
        }

        for (_, weight) in self.field_weights.iter() {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(EncodingError::WeightOutOfRange { weight });
            }
        }
        check_weight_sum(self.field_weights.iter().map(|(_, w)| w))?;

        self.resolved_record_length()?;

        Ok(())
    }

    /// Explicit record length, or the length derived from the fields.
    pub fn resolved_record_length(&self) -> Result<usize, EncodingError> {
        match self.record_length {
            Some(length) => check_record_length(length),
            None => derive_record_length(
                IdatField::ALL
                    .iter()
                    .map(|&f| (self.field_lengths.get(f), self.field_weights.get(f))),
            ),
        }
    }

    /// Builder-style method to set the permutation seed
    pub fn with_permutation_seed(mut self, seed: i64) -> Self {
        self.permutation_seed = seed;
        self
    }

    /// Builder-style method to set the hasher
    pub fn with_hasher(mut self, hasher: HasherAlgorithm) -> Self {
        self.hasher = hasher;
        self
    }
}

/// Builder for EncodingConfig with validation
#[derive(Default)]
pub struct EncodingConfigBuilder {
    field_lengths: Option<FieldLengths>,
    field_weights: Option<FieldWeights>,
    record_length: Option<Option<usize>>,
    permutation_seed: Option<i64>,
    hasher: Option<HasherAlgorithm>,
}

impl EncodingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length of one field
    pub fn field_length(mut self, field: IdatField, length: usize) -> Self {
        self.field_lengths
            .get_or_insert_with(FieldLengths::default)
            .set(field, length);
        self
    }

    /// Set all field lengths
    pub fn field_lengths(mut self, lengths: FieldLengths) -> Self {
        self.field_lengths = Some(lengths);
        self
    }

    /// Set the weight of one field
    pub fn field_weight(mut self, field: IdatField, weight: f64) -> Self {
        self.field_weights
            .get_or_insert_with(FieldWeights::default)
            .set(field, weight);
        self
    }

    /// Set all field weights
    pub fn field_weights(mut self, weights: FieldWeights) -> Self {
        self.field_weights = Some(weights);
        self
    }

    /// Set an explicit record length
    pub fn record_length(mut self, length: usize) -> Self {
        self.record_length = Some(Some(length));
        self
    }

    /// Derive the record length from field lengths and weights
    pub fn derived_record_length(mut self) -> Self {
        self.record_length = Some(None);
        self
    }

    pub fn permutation_seed(mut self, seed: i64) -> Self {
        self.permutation_seed = Some(seed);
        self
    }

    pub fn hasher(mut self, hasher: HasherAlgorithm) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Build the EncodingConfig, validating all parameters
    pub fn build(self) -> Result<EncodingConfig, EncodingError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation (for tests of invalid configurations)
    pub fn build_unchecked(self) -> EncodingConfig {
        let defaults = EncodingConfig::default();

        EncodingConfig {
            field_lengths: self.field_lengths.unwrap_or(defaults.field_lengths),
            field_weights: self.field_weights.unwrap_or(defaults.field_weights),
            record_length: self.record_length.unwrap_or(defaults.record_length),
            permutation_seed: self.permutation_seed.unwrap_or(defaults.permutation_seed),
            hasher: self.hasher.unwrap_or(defaults.hasher),
        }
    }
}

/// Secret key material distributed to every organization of a linkage run.
///
/// Holds the permutation seed and the two HMAC keys. Zeroized on drop and
/// never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BloomFilterKeys {
    permutation_seed: i64,
    first_hash_key: [u8; HASH_KEY_LENGTH],
    second_hash_key: [u8; HASH_KEY_LENGTH],
}

impl BloomFilterKeys {
    pub fn from_parts(
        permutation_seed: i64,
        first_hash_key: &[u8],
        second_hash_key: &[u8],
    ) -> Result<Self, EncodingError> {
        let mut keys = Self {
            permutation_seed,
            first_hash_key: [0u8; HASH_KEY_LENGTH],
            second_hash_key: [0u8; HASH_KEY_LENGTH],
        };
        copy_key(&mut keys.first_hash_key, first_hash_key)?;
        copy_key(&mut keys.second_hash_key, second_hash_key)?;
        Ok(keys)
    }

    /// Parse the 72-byte form: big-endian seed, first key, second key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        if bytes.len() != BLOOM_FILTER_KEYS_LENGTH {
            return Err(EncodingError::InvalidKeyLength {
                expected: BLOOM_FILTER_KEYS_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&bytes[..8]);
        Self::from_parts(
            i64::from_be_bytes(seed),
            &bytes[8..8 + HASH_KEY_LENGTH],
            &bytes[8 + HASH_KEY_LENGTH..],
        )
    }

    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(Vec::with_capacity(BLOOM_FILTER_KEYS_LENGTH));
        bytes.extend_from_slice(&self.permutation_seed.to_be_bytes());
        bytes.extend_from_slice(&self.first_hash_key);
        bytes.extend_from_slice(&self.second_hash_key);
        bytes
    }

    /// Fresh key material from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut keys = Self {
            permutation_seed: rng.gen(),
            first_hash_key: [0u8; HASH_KEY_LENGTH],
            second_hash_key: [0u8; HASH_KEY_LENGTH],
        };
        rng.fill_bytes(&mut keys.first_hash_key);
        rng.fill_bytes(&mut keys.second_hash_key);
        keys
    }

    pub fn permutation_seed(&self) -> i64 {
        self.permutation_seed
    }

    pub fn first_hash_key(&self) -> &[u8] {
        &self.first_hash_key
    }

    pub fn second_hash_key(&self) -> &[u8] {
        &self.second_hash_key
    }
}

impl fmt::Debug for BloomFilterKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilterKeys").finish_non_exhaustive()
    }
}

fn copy_key(target: &mut [u8; HASH_KEY_LENGTH], key: &[u8]) -> Result<(), EncodingError> {
    if key.len() != HASH_KEY_LENGTH {
        return Err(EncodingError::InvalidKeyLength {
            expected: HASH_KEY_LENGTH,
            actual: key.len(),
        });
    }
    target.copy_from_slice(key);
    Ok(())
}
