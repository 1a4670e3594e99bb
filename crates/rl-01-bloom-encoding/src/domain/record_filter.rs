//! Record-level Bloom filter composer
//!
//! Combines weighted field filters into one permuted bit vector:
//!
//! 1. Each field contributes `round(L_r * w_f)` bits, `bits[j mod L_f]`.
//! 2. Contributions are concatenated in field order, clipped to `L_r` when
//!    rounding overshoots, and zero padded to `L_r`.
//! 3. The sequence is shuffled with a Fisher–Yates permutation seeded by the
//!    permutation seed.
//!
//! Same fields and same seed always give a bit-identical record vector.

use std::sync::OnceLock;

use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::RecordVector;

use super::field_filter::FieldBloomFilter;
use super::parameters::{check_record_length, check_weight_sum, derive_record_length, sample_count};
use crate::error::EncodingError;

/// Composed record Bloom filter. The vector is computed on first access.
#[derive(Debug)]
pub struct RecordBloomFilter {
    length: usize,
    seed: i64,
    fields: Vec<FieldBloomFilter>,
    bits: OnceLock<RecordVector>,
}

impl RecordBloomFilter {
    /// Compose with `L_r = max_f floor(L_f / w_f)`.
    pub fn new(fields: Vec<FieldBloomFilter>, seed: i64) -> Result<Self, EncodingError> {
        if fields.is_empty() {
            return Err(EncodingError::NoFields);
        }
        check_weight_sum(fields.iter().map(FieldBloomFilter::weight))?;

        let length = derive_record_length(fields.iter().map(|f| (f.len(), f.weight())))?;

        Self::with_length(length, fields, seed)
    }

    /// Compose with an explicit record length.
    pub fn with_length(
        length: usize,
        fields: Vec<FieldBloomFilter>,
        seed: i64,
    ) -> Result<Self, EncodingError> {
        if fields.is_empty() {
            return Err(EncodingError::NoFields);
        }
        check_record_length(length)?;
        check_weight_sum(fields.iter().map(FieldBloomFilter::weight))?;

        Ok(Self {
            length,
            seed,
            fields,
            bits: OnceLock::new(),
        })
    }

    /// Record length `L_r`.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Nominal bits sampled from the field at `index`, `None` if out of
    /// range. Trailing fields may lose a rounding bit to clipping.
    pub fn sample_count(&self, index: usize) -> Option<usize> {
        self.fields
            .get(index)
            .map(|field| sample_count(self.length, field.weight()))
    }

    /// The composed vector.
    pub fn bits(&self) -> &RecordVector {
        self.bits.get_or_init(|| self.compose())
    }

    pub fn into_record_vector(mut self) -> RecordVector {
        match self.bits.take() {
            Some(bits) => bits,
            None => self.compose(),
        }
    }

    fn compose(&self) -> RecordVector {
        let mut bits = BitVec::<u8, Lsb0>::with_capacity(self.length);

        for field in &self.fields {
            let samples = sample_count(self.length, field.weight());
            let source = field.bits();
            let room = self.length - bits.len();
            for j in 0..samples.min(room) {
                bits.push(source[j % source.len()]);
            }
        }
        bits.resize(self.length, false);

        shuffle(&mut bits, self.seed);
        RecordVector::from_bits(bits)
    }
}

/// Fisher–Yates shuffle driven by a seeded [`StdRng`].
fn shuffle(bits: &mut BitSlice<u8, Lsb0>, seed: i64) {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    for i in (1..bits.len()).rev() {
        let j = rng.gen_range(0..=i);
        bits.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ones: &[usize], length: usize, weight: f64) -> FieldBloomFilter {
        let mut bits = bitvec![u8, Lsb0; 0; length];
        for &i in ones {
            bits.set(i, true);
        }
        FieldBloomFilter::new(bits, weight).unwrap()
    }

    #[test]
    fn test_same_seed_gives_identical_vector() {
        let a = RecordBloomFilter::with_length(100, vec![field(&[1, 5, 9], 50, 0.5)], 42).unwrap();
        let b = RecordBloomFilter::with_length(100, vec![field(&[1, 5, 9], 50, 0.5)], 42).unwrap();

        assert_eq!(a.bits(), b.bits());
        assert_eq!(a.bits().len(), 100);
    }

    #[test]
    fn test_different_seed_permutes_differently() {
        let ones: Vec<usize> = (0..25).collect();
        let a = RecordBloomFilter::with_length(100, vec![field(&ones, 50, 0.5)], 1).unwrap();
        let b = RecordBloomFilter::with_length(100, vec![field(&ones, 50, 0.5)], 2).unwrap();

        assert_eq!(a.bits().cardinality(), b.bits().cardinality());
        assert_ne!(a.bits(), b.bits(), "Seeds must select different permutations");
    }

    #[test]
    fn test_cyclic_sampling_wraps_short_field() {
        // 10-bit field with 2 ones sampled 40 times: every bit read 4 times.
        let filter = RecordBloomFilter::with_length(40, vec![field(&[0, 7], 10, 1.0)], 3).unwrap();

        assert_eq!(filter.sample_count(0), Some(40));
        assert_eq!(filter.bits().cardinality(), 8);
    }

    #[test]
    fn test_partial_sampling_takes_prefix() {
        // 5 of 10 bits sampled, bit 7 lies outside the sampled prefix.
        let filter = RecordBloomFilter::with_length(10, vec![field(&[0, 7], 10, 0.5)], 3).unwrap();

        assert_eq!(filter.sample_count(0), Some(5));
        assert_eq!(filter.bits().cardinality(), 1);
    }

    #[test]
    fn test_derived_length() {
        let filter =
            RecordBloomFilter::new(vec![field(&[0], 500, 0.5), field(&[0], 100, 0.25)], 0).unwrap();

        assert_eq!(filter.length(), 1000);
        assert_eq!(filter.sample_count(0), Some(500));
        assert_eq!(filter.sample_count(1), Some(250));
        assert_eq!(filter.sample_count(2), None);
    }

    #[test]
    fn test_weight_sum_above_one_is_rejected() {
        let result = RecordBloomFilter::with_length(
            100,
            vec![field(&[0], 10, 0.6), field(&[0], 10, 0.5)],
            0,
        );

        assert!(matches!(result, Err(EncodingError::WeightSumExceeded { .. })));
    }

    #[test]
    fn test_rounding_excess_is_clipped() {
        // 4 * round(2.5) = 12 samples for a 10-bit record.
        let ones: Vec<usize> = (0..10).collect();
        let fields = (0..4).map(|_| field(&ones, 10, 0.25)).collect();
        let filter = RecordBloomFilter::with_length(10, fields, 5).unwrap();

        assert_eq!(filter.sample_count(3), Some(3));
        assert_eq!(filter.bits().len(), 10);
        assert_eq!(filter.bits().cardinality(), 10);
    }

    #[test]
    fn test_oversized_length_is_rejected() {
        let result = RecordBloomFilter::with_length(
            crate::domain::parameters::MAX_RECORD_LENGTH + 1,
            vec![field(&[0], 10, 0.5)],
            0,
        );

        assert!(matches!(result, Err(EncodingError::InvalidLength(_))));
    }

    #[test]
    fn test_tiny_weight_cannot_derive_length() {
        let result = RecordBloomFilter::new(vec![field(&[0], 10, 1e-300)], 0);

        assert!(matches!(result, Err(EncodingError::InvalidLength(_))));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        assert!(matches!(
            RecordBloomFilter::new(Vec::new(), 0),
            Err(EncodingError::NoFields)
        ));
    }

    #[test]
    fn test_zero_weights_cannot_derive_length() {
        let result = RecordBloomFilter::new(vec![field(&[0], 10, 0.0)], 0);

        assert!(matches!(result, Err(EncodingError::InvalidLength(_))));
    }

    #[test]
    fn test_into_record_vector_matches_lazy_bits() {
        let filter = RecordBloomFilter::with_length(64, vec![field(&[2, 3], 16, 1.0)], 9).unwrap();
        let lazy = filter.bits().clone();

        assert_eq!(filter.into_record_vector(), lazy);
    }
}
