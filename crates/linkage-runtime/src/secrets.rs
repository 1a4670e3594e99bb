//! # Secret Loading
//!
//! Key material comes from the environment as hex:
//!
//! - `RL_BLOOM_FILTER_KEYS`: permutation seed and both hash keys (72 bytes)
//! - `RL_RESEARCH_STUDY_KEY`: AES-256 pseudonym key (32 bytes)
//!
//! Decoded bytes are zeroized after parsing and never logged.

use std::env;

use anyhow::{anyhow, Context, Result};
use rl_01_bloom_encoding::BloomFilterKeys;
use rl_03_pseudonyms::ResearchStudyKey;
use serde::Serialize;
use tracing::info;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const BLOOM_FILTER_KEYS_VAR: &str = "RL_BLOOM_FILTER_KEYS";
pub const RESEARCH_STUDY_KEY_VAR: &str = "RL_RESEARCH_STUDY_KEY";

/// Bloom filter keys from the process environment.
pub fn bloom_filter_keys_from_env() -> Result<BloomFilterKeys> {
    bloom_filter_keys(|name| env::var(name).ok())
}

/// Research study key from the process environment.
pub fn research_study_key_from_env() -> Result<ResearchStudyKey> {
    research_study_key(|name| env::var(name).ok())
}

pub fn bloom_filter_keys<F>(lookup: F) -> Result<BloomFilterKeys>
where
    F: Fn(&str) -> Option<String>,
{
    let bytes = decode_hex_var(&lookup, BLOOM_FILTER_KEYS_VAR)?;
    let keys = BloomFilterKeys::from_bytes(&bytes)
        .with_context(|| format!("{} holds invalid key material", BLOOM_FILTER_KEYS_VAR))?;
    info!("Loaded Bloom filter keys from environment");
    Ok(keys)
}

pub fn research_study_key<F>(lookup: F) -> Result<ResearchStudyKey>
where
    F: Fn(&str) -> Option<String>,
{
    let bytes = decode_hex_var(&lookup, RESEARCH_STUDY_KEY_VAR)?;
    let key = ResearchStudyKey::from_bytes(&bytes)
        .with_context(|| format!("{} holds invalid key material", RESEARCH_STUDY_KEY_VAR))?;
    info!("Loaded research study key from environment");
    Ok(key)
}

fn decode_hex_var<F>(lookup: &F, name: &str) -> Result<Zeroizing<Vec<u8>>>
where
    F: Fn(&str) -> Option<String>,
{
    let value = Zeroizing::new(lookup(name).ok_or_else(|| anyhow!("{} is not set", name))?);
    let bytes = hex::decode(value.trim())
        .map_err(|_| anyhow!("{} must be hex encoded", name))?;
    Ok(Zeroizing::new(bytes))
}

/// Freshly generated key material, hex encoded.
#[derive(Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKeys {
    pub bloom_filter_keys: String,
    pub research_study_key: String,
}

impl GeneratedKeys {
    pub fn generate() -> Self {
        let bloom_filter_keys = BloomFilterKeys::generate();
        let research_study_key = ResearchStudyKey::generate();
        Self {
            bloom_filter_keys: hex::encode(bloom_filter_keys.to_bytes().as_slice()),
            research_study_key: hex::encode(research_study_key.as_bytes()),
        }
    }
}
