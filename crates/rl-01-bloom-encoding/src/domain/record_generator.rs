//! Record Bloom filter generator for a full [`Idat`]
//!
//! Binds one field generator per [`IdatField`], each with its own length and
//! its own weight, and composes the nine field filters into the record
//! vector.

use shared_types::{Idat, IdatField, RecordVector};

use super::config::EncodingConfig;
use super::field_filter::{FieldBloomFilter, FieldBloomFilterGenerator};
use super::hash_functions::BiGramHasher;
use super::record_filter::RecordBloomFilter;
use crate::error::EncodingError;

/// Encodes identifying data records with a validated configuration.
#[derive(Debug, Clone)]
pub struct RecordBloomFilterGenerator {
    config: EncodingConfig,
    record_length: usize,
    field_generators: Vec<(IdatField, FieldBloomFilterGenerator)>,
}

impl RecordBloomFilterGenerator {
    pub fn new(config: EncodingConfig) -> Result<Self, EncodingError> {
        config.validate()?;
        let record_length = config.resolved_record_length()?;

        let field_generators = config
            .field_lengths
            .iter()
            .map(|(field, length)| Ok((field, FieldBloomFilterGenerator::new(length)?)))
            .collect::<Result<Vec<_>, EncodingError>>()?;

        Ok(Self {
            config,
            record_length,
            field_generators,
        })
    }

    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    pub fn record_length(&self) -> usize {
        self.record_length
    }

    /// Field filters of `idat` in composition order.
    pub fn field_filters(
        &self,
        idat: &Idat,
        hasher: &mut dyn BiGramHasher,
    ) -> Result<Vec<FieldBloomFilter>, EncodingError> {
        self.field_generators
            .iter()
            .map(|(field, generator)| {
                let bits = generator.generate(idat.get(*field), hasher);
                FieldBloomFilter::new(bits, self.config.field_weights.get(*field))
            })
            .collect()
    }

    /// Record vector with the configured permutation seed.
    pub fn generate(
        &self,
        idat: &Idat,
        hasher: &mut dyn BiGramHasher,
    ) -> Result<RecordVector, EncodingError> {
        self.generate_with_seed(idat, self.config.permutation_seed, hasher)
    }

    /// Record vector with an explicit permutation seed.
    pub fn generate_with_seed(
        &self,
        idat: &Idat,
        seed: i64,
        hasher: &mut dyn BiGramHasher,
    ) -> Result<RecordVector, EncodingError> {
        let fields = self.field_filters(idat, hasher)?;
        let record = RecordBloomFilter::with_length(self.record_length, fields, seed)?;
        Ok(record.into_record_vector())
    }
}
