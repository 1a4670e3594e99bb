//! Hash functions for field Bloom filters
//!
//! Every bigram of an attribute is hashed by two independent digests and the
//! outputs are combined with double hashing: `g(i) = h1 + i * h2 (mod m)`.
//!
//! Digests carry internal state between calls, so a hasher is never shared
//! between threads. Batch encoders obtain one hasher per worker from a
//! [`BiGramHasherFactory`].

use std::fmt;
use std::iter;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

use crate::domain::config::BloomFilterKeys;
use crate::error::EncodingError;

/// Number of bit positions derived from every bigram.
pub const NUMBER_OF_HASH_FUNCTIONS: usize = 15;

/// Pair of hash functions applied to the bigrams of an attribute.
pub trait BiGramHasher: Send {
    /// First digest of `bigram`, interpreted as `h1`.
    fn first_hash(&mut self, bigram: &[u8]) -> Vec<u8>;

    /// Second digest of `bigram`, interpreted as `h2`.
    fn second_hash(&mut self, bigram: &[u8]) -> Vec<u8>;

    fn algorithm(&self) -> HasherAlgorithm;
}

/// Supported digest pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HasherAlgorithm {
    /// Unkeyed SHA-256 / SHA3-256. Only for non-sensitive test data.
    #[serde(rename = "SHA256_SHA3_256")]
    Sha256Sha3,
    /// HMAC-SHA256 / HMAC-SHA3-256 with two independent keys.
    #[default]
    #[serde(rename = "HMAC_SHA256_HMAC_SHA3_256")]
    HmacSha256HmacSha3,
}

impl HasherAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            HasherAlgorithm::Sha256Sha3 => "SHA256_SHA3_256",
            HasherAlgorithm::HmacSha256HmacSha3 => "HMAC_SHA256_HMAC_SHA3_256",
        }
    }

    /// Whether the algorithm needs secret key material.
    pub fn is_keyed(self) -> bool {
        matches!(self, HasherAlgorithm::HmacSha256HmacSha3)
    }
}

impl fmt::Display for HasherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HasherAlgorithm {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SHA256_SHA3_256" => Ok(HasherAlgorithm::Sha256Sha3),
            "HMAC_SHA256_HMAC_SHA3_256" => Ok(HasherAlgorithm::HmacSha256HmacSha3),
            other => Err(EncodingError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Unkeyed SHA-256 / SHA3-256 bigram hasher.
#[derive(Clone, Default)]
pub struct Sha256Sha3BiGramHasher {
    sha256: Sha256,
    sha3: Sha3_256,
}

impl Sha256Sha3BiGramHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BiGramHasher for Sha256Sha3BiGramHasher {
    fn first_hash(&mut self, bigram: &[u8]) -> Vec<u8> {
        Digest::update(&mut self.sha256, bigram);
        self.sha256.finalize_reset().to_vec()
    }

    fn second_hash(&mut self, bigram: &[u8]) -> Vec<u8> {
        Digest::update(&mut self.sha3, bigram);
        self.sha3.finalize_reset().to_vec()
    }

    fn algorithm(&self) -> HasherAlgorithm {
        HasherAlgorithm::Sha256Sha3
    }
}

type HmacSha256 = Hmac<Sha256>;
type HmacSha3 = Hmac<Sha3_256>;

/// Keyed HMAC-SHA256 / HMAC-SHA3-256 bigram hasher.
///
/// Holds the two MACs already keyed; every digest starts from a copy of the
/// keyed state.
#[derive(Clone)]
pub struct HmacSha256HmacSha3BiGramHasher {
    first: HmacSha256,
    second: HmacSha3,
}

impl HmacSha256HmacSha3BiGramHasher {
    pub fn new(first_key: &[u8], second_key: &[u8]) -> Result<Self, EncodingError> {
        let first = HmacSha256::new_from_slice(first_key).map_err(|_| {
            EncodingError::InvalidKeyLength {
                expected: super::config::HASH_KEY_LENGTH,
                actual: first_key.len(),
            }
        })?;
        let second = HmacSha3::new_from_slice(second_key).map_err(|_| {
            EncodingError::InvalidKeyLength {
                expected: super::config::HASH_KEY_LENGTH,
                actual: second_key.len(),
            }
        })?;
        Ok(Self { first, second })
    }

    pub fn from_keys(keys: &BloomFilterKeys) -> Result<Self, EncodingError> {
        Self::new(keys.first_hash_key(), keys.second_hash_key())
    }
}

impl BiGramHasher for HmacSha256HmacSha3BiGramHasher {
    fn first_hash(&mut self, bigram: &[u8]) -> Vec<u8> {
        let mut mac = self.first.clone();
        mac.update(bigram);
        mac.finalize().into_bytes().to_vec()
    }

    fn second_hash(&mut self, bigram: &[u8]) -> Vec<u8> {
        let mut mac = self.second.clone();
        mac.update(bigram);
        mac.finalize().into_bytes().to_vec()
    }

    fn algorithm(&self) -> HasherAlgorithm {
        HasherAlgorithm::HmacSha256HmacSha3
    }
}

#[derive(Clone)]
enum Prototype {
    Sha256Sha3(Sha256Sha3BiGramHasher),
    HmacSha256HmacSha3(HmacSha256HmacSha3BiGramHasher),
}

/// Creates independent hasher instances for parallel workers.
///
/// The factory validates the algorithm and key material once; every call to
/// [`BiGramHasherFactory::create`] returns a fresh hasher with its own state.
#[derive(Clone)]
pub struct BiGramHasherFactory {
    prototype: Prototype,
}

impl BiGramHasherFactory {
    /// Factory for `algorithm`. Keyed algorithms fail without `keys`.
    pub fn new(
        algorithm: HasherAlgorithm,
        keys: Option<&BloomFilterKeys>,
    ) -> Result<Self, EncodingError> {
        let prototype = match (algorithm, keys) {
            (HasherAlgorithm::Sha256Sha3, _) => Prototype::Sha256Sha3(Sha256Sha3BiGramHasher::new()),
            (HasherAlgorithm::HmacSha256HmacSha3, Some(keys)) => {
                Prototype::HmacSha256HmacSha3(HmacSha256HmacSha3BiGramHasher::from_keys(keys)?)
            }
            (HasherAlgorithm::HmacSha256HmacSha3, None) => {
                return Err(EncodingError::MissingKeys { algorithm })
            }
        };
        Ok(Self { prototype })
    }

    pub fn algorithm(&self) -> HasherAlgorithm {
        match &self.prototype {
            Prototype::Sha256Sha3(_) => HasherAlgorithm::Sha256Sha3,
            Prototype::HmacSha256HmacSha3(_) => HasherAlgorithm::HmacSha256HmacSha3,
        }
    }

    /// A hasher owned by the caller.
    pub fn create(&self) -> Box<dyn BiGramHasher> {
        match &self.prototype {
            Prototype::Sha256Sha3(hasher) => Box::new(hasher.clone()),
            Prototype::HmacSha256HmacSha3(hasher) => Box::new(hasher.clone()),
        }
    }
}

/// UTF-8 encoded two-character windows of `" " + value + " "`.
///
/// Windows slide by one character, so a value of `n` characters yields
/// `n + 1` bigrams and the empty string yields one.
pub fn to_bigrams(value: &str) -> Vec<Vec<u8>> {
    let padded: Vec<char> = iter::once(' ')
        .chain(value.chars())
        .chain(iter::once(' '))
        .collect();

    padded
        .windows(2)
        .map(|pair| {
            let mut bigram = String::with_capacity(8);
            bigram.push(pair[0]);
            bigram.push(pair[1]);
            bigram.into_bytes()
        })
        .collect()
}

/// Compute `k` bit positions `(h1 + i * h2) mod m` for `i in 0..k`.
///
/// Both digests are read as signed big-endian two's complement integers, so
/// the arithmetic runs on [`BigInt`] and the result is taken non-negative.
/// `h1` and `h2` are reduced modulo `m` first; the positions are congruent.
pub fn compute_hash_positions(first: &[u8], second: &[u8], k: usize, m: usize) -> Vec<usize> {
    if m == 0 {
        return Vec::new();
    }
    let modulus = BigInt::from(m);
    let h1 = reduce(&BigInt::from_signed_bytes_be(first), &modulus) as u128;
    let h2 = reduce(&BigInt::from_signed_bytes_be(second), &modulus) as u128;
    let m = m as u128;

    (0..k as u128)
        .map(|i| ((h1 + h2 * i) % m) as usize)
        .collect()
}

/// Non-negative remainder of `value` modulo `modulus`.
fn reduce(value: &BigInt, modulus: &BigInt) -> u64 {
    let mut remainder = value % modulus;
    if remainder.sign() == Sign::Minus {
        remainder += modulus;
    }
    let (_, digits) = remainder.to_u64_digits();
    digits.first().copied().unwrap_or(0)
}
