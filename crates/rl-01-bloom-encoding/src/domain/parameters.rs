//! Record Bloom filter parameter calculation
//!
//! Formulas:
//! - samples(f) = round(L_r * w_f)        -- bits contributed by field f
//! - L_r        = max_f floor(L_f / w_f)  -- derived record length, w_f > 0
//!
//! A field vector shorter than its sample count is read cyclically. When
//! rounding makes the samples sum past `L_r`, the concatenation is clipped
//! to `L_r` so the last fields lose at most one bit each.

use crate::domain::hash_functions::NUMBER_OF_HASH_FUNCTIONS;
use crate::error::EncodingError;

/// Largest record length accepted, explicit or derived. Matches what a
/// linkage party accepts on the wire.
pub const MAX_RECORD_LENGTH: usize = shared_types::MAX_RECORD_BITS;

/// Tolerance on the weight sum, absorbs float rounding of e.g. ten `0.1`s.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Number of bits a field with `weight` contributes to a record of
/// `record_length` bits.
pub fn sample_count(record_length: usize, weight: f64) -> usize {
    (record_length as f64 * weight).round() as usize
}

/// Total sampled bits for `weights`.
pub fn total_samples(record_length: usize, weights: impl IntoIterator<Item = f64>) -> usize {
    weights
        .into_iter()
        .map(|w| sample_count(record_length, w))
        .sum()
}

/// Derive `L_r` from `(L_f, w_f)` pairs.
///
/// Fails when no field carries a positive weight or the derived length
/// exceeds [`MAX_RECORD_LENGTH`].
pub fn derive_record_length(
    fields: impl IntoIterator<Item = (usize, f64)>,
) -> Result<usize, EncodingError> {
    let derived = fields
        .into_iter()
        .filter(|(_, weight)| *weight > 0.0)
        .map(|(length, weight)| (length as f64 / weight).floor())
        .fold(None, |max: Option<f64>, length| {
            Some(max.map_or(length, |m| m.max(length)))
        })
        .ok_or_else(|| {
            EncodingError::InvalidLength(
                "record length cannot be derived when every weight is 0".to_string(),
            )
        })?;

    if derived > MAX_RECORD_LENGTH as f64 {
        return Err(EncodingError::InvalidLength(format!(
            "derived record length {} exceeds {}",
            derived, MAX_RECORD_LENGTH
        )));
    }
    check_record_length(derived as usize)
}

/// Reject zero and oversized record lengths.
pub fn check_record_length(length: usize) -> Result<usize, EncodingError> {
    if length == 0 {
        return Err(EncodingError::InvalidLength(
            "record length cannot be 0".to_string(),
        ));
    }
    if length > MAX_RECORD_LENGTH {
        return Err(EncodingError::InvalidLength(format!(
            "record length {} exceeds {}",
            length, MAX_RECORD_LENGTH
        )));
    }
    Ok(length)
}

/// Reject weight sets that sum to more than 1.
pub fn check_weight_sum(weights: impl IntoIterator<Item = f64>) -> Result<f64, EncodingError> {
    let sum: f64 = weights.into_iter().sum();
    if sum > 1.0 + WEIGHT_SUM_TOLERANCE {
        return Err(EncodingError::WeightSumExceeded { sum });
    }
    Ok(sum)
}

/// Upper bound on set bits in a field vector for a value of `chars`
/// characters; collisions only lower the actual count.
pub fn max_field_cardinality(chars: usize) -> usize {
    NUMBER_OF_HASH_FUNCTIONS * (chars + 1)
}
