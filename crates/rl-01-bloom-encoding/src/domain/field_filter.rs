//! Field-level Bloom filters
//!
//! One attribute value becomes a bit vector of fixed length `L_f`: every
//! bigram of the padded value sets [`NUMBER_OF_HASH_FUNCTIONS`] bits.

use bitvec::prelude::*;

use super::hash_functions::{compute_hash_positions, to_bigrams, BiGramHasher, NUMBER_OF_HASH_FUNCTIONS};
use crate::error::EncodingError;

/// Bit vector of a single encoded attribute.
pub type FieldBits = BitVec<u8, Lsb0>;

/// Encodes attribute values into field bit vectors of one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBloomFilterGenerator {
    length: usize,
}

impl FieldBloomFilterGenerator {
    pub fn new(length: usize) -> Result<Self, EncodingError> {
        if length == 0 {
            return Err(EncodingError::InvalidLength(
                "field length cannot be 0".to_string(),
            ));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Encode `value`. The empty string is valid and sets only the bits of
    /// the padding bigram.
    pub fn generate(&self, value: &str, hasher: &mut dyn BiGramHasher) -> FieldBits {
        let mut bits = bitvec![u8, Lsb0; 0; self.length];

        for bigram in to_bigrams(value) {
            let h1 = hasher.first_hash(&bigram);
            let h2 = hasher.second_hash(&bigram);
            for pos in compute_hash_positions(&h1, &h2, NUMBER_OF_HASH_FUNCTIONS, self.length) {
                bits.set(pos, true);
            }
        }

        bits
    }
}

/// An encoded attribute and its share of the record vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBloomFilter {
    bits: FieldBits,
    weight: f64,
}

impl FieldBloomFilter {
    /// `weight` must be a finite value in `[0, 1]`, `bits` must not be empty.
    pub fn new(bits: FieldBits, weight: f64) -> Result<Self, EncodingError> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(EncodingError::WeightOutOfRange { weight });
        }
        if bits.is_empty() {
            return Err(EncodingError::InvalidLength(
                "field bit vector cannot be empty".to_string(),
            ));
        }
        Ok(Self { bits, weight })
    }

    pub fn bits(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Field length `L_f`.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}
