//! Record-level bit vector
//!
//! The output of the record Bloom filter composer and the input of the
//! matchers. Stored as `BitVec<u8, Lsb0>` so the raw slice is directly the
//! interchange byte layout: bit `i` lives in byte `i / 8` at position `i % 8`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bitvec::prelude::*;

use crate::errors::InterchangeError;

/// Largest record length, in bits, accepted from a peer.
pub const MAX_RECORD_BITS: usize = 1 << 24;

/// Fixed-length record bit vector.
///
/// Not serde-serializable; records travel as Base64 inside
/// [`TransferRecord`](crate::TransferRecord).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordVector {
    bits: BitVec<u8, Lsb0>,
}

impl RecordVector {
    /// All-zero vector of `len` bits.
    pub fn zeroed(len: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; len],
        }
    }

    /// Wrap an existing bit vector.
    pub fn from_bits(mut bits: BitVec<u8, Lsb0>) -> Self {
        bits.set_uninitialized(false);
        Self { bits }
    }

    /// Build a vector of `len` bits with the given positions set.
    ///
    /// Positions outside `0..len` are ignored.
    pub fn from_positions(len: usize, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut bits = bitvec![u8, Lsb0; 0; len];
        for pos in positions {
            if pos < len {
                bits.set(pos, true);
            }
        }
        Self { bits }
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits (popcount).
    pub fn cardinality(&self) -> usize {
        self.bits.count_ones()
    }

    /// Popcount of `self AND other` over the common prefix.
    ///
    /// Works on the raw byte slices; padding bits beyond `len` are always
    /// zero so they never contribute.
    pub fn intersection_cardinality(&self, other: &RecordVector) -> usize {
        self.bits
            .as_raw_slice()
            .iter()
            .zip(other.bits.as_raw_slice())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Bit at `index`, `false` when out of range.
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index).map(|b| *b).unwrap_or(false)
    }

    pub fn as_bits(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    /// Raw interchange bytes, `ceil(len / 8)` of them.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits.as_raw_slice().to_vec()
    }

    /// Rebuild a vector of `len` bits from interchange bytes.
    ///
    /// Peers may trim trailing zero bytes, so shorter input is zero padded.
    /// Input with set bits at or beyond `len` is rejected, as is a `len`
    /// above [`MAX_RECORD_BITS`].
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self, InterchangeError> {
        if len > MAX_RECORD_BITS {
            return Err(InterchangeError::LengthTooLarge {
                length: len,
                max: MAX_RECORD_BITS,
            });
        }
        let mut bits = BitVec::<u8, Lsb0>::from_slice(bytes);
        if bits.len() > len {
            if bits[len..].any() {
                return Err(InterchangeError::VectorTooLong {
                    expected_bits: len,
                    actual_bytes: bytes.len(),
                });
            }
            bits.truncate(len);
            bits.set_uninitialized(false);
        } else {
            bits.resize(len, false);
        }
        Ok(Self { bits })
    }

    /// Base64 (standard alphabet, padded) of [`RecordVector::to_bytes`].
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.bits.as_raw_slice())
    }

    /// Decode a transferred vector of `len` bits.
    pub fn from_base64(encoded: &str, len: usize) -> Result<Self, InterchangeError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| InterchangeError::InvalidBase64(e.to_string()))?;
        Self::from_bytes(&bytes, len)
    }
}
