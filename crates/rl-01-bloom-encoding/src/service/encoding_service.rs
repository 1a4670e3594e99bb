//! Record Encoding Service
//!
//! Implements [`RecordEncodingApi`]. Batches are encoded with rayon; every
//! worker obtains its own hasher through `map_init`, so digest state is never
//! shared between threads.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use shared_types::{Idat, IdatField, OrganizationId, RecordVector, TransferRecord};
use tracing::{debug, info, instrument};

use crate::domain::{
    BiGramHasher, BiGramHasherFactory, BloomFilterKeys, EncodingConfig, FieldBits,
    FieldBloomFilter, FieldBloomFilterGenerator, RecordBloomFilter, RecordBloomFilterGenerator,
};
use crate::error::EncodingError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{IdatProvider, RecordEncodingApi};

/// Parallel threshold - use sequential for small batches.
pub const PARALLEL_THRESHOLD: usize = 4;

/// Record encoding service for one data holder.
pub struct RecordEncodingService {
    generator: RecordBloomFilterGenerator,
    hashers: BiGramHasherFactory,
    metrics: Arc<dyn MetricsRecorder>,
}

impl RecordEncodingService {
    /// Create a service. Keyed hash algorithms need `keys`.
    pub fn new(
        config: EncodingConfig,
        keys: Option<&BloomFilterKeys>,
    ) -> Result<Self, EncodingError> {
        let hashers = BiGramHasherFactory::new(config.hasher, keys)?;
        let generator = RecordBloomFilterGenerator::new(config)?;

        debug!(
            algorithm = %hashers.algorithm(),
            record_length = generator.record_length(),
            "Record encoding service configured"
        );

        Ok(Self {
            generator,
            hashers,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Attach a metrics recorder
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &EncodingConfig {
        self.generator.config()
    }

    pub fn record_length(&self) -> usize {
        self.generator.record_length()
    }

    /// Encode every record of `provider` into transfer records.
    ///
    /// With `include_local_ids == false` the organization-only variant is
    /// produced and no local identifier leaves the data holder.
    #[instrument(skip_all, fields(organization = %organization))]
    pub fn encode_provider(
        &self,
        provider: &dyn IdatProvider,
        organization: &OrganizationId,
        include_local_ids: bool,
    ) -> Result<Vec<TransferRecord>, EncodingError> {
        let records = provider.load_idats()?;
        let idats: Vec<Idat> = records.iter().map(|r| r.idat.clone()).collect();
        let vectors = self.generate_records(&idats)?;

        let transfer: Vec<TransferRecord> = records
            .into_iter()
            .zip(vectors.iter())
            .map(|(record, vector)| {
                let local_id = include_local_ids.then_some(record.local_id);
                TransferRecord::new(organization.clone(), local_id, vector)
            })
            .collect();

        info!(
            records = transfer.len(),
            include_local_ids, "Encoded identifying data into record vectors"
        );
        Ok(transfer)
    }

    fn encode_one(
        &self,
        idat: &Idat,
        hasher: &mut dyn BiGramHasher,
    ) -> Result<RecordVector, EncodingError> {
        let start = Instant::now();
        let record = self.generator.generate(idat, hasher)?;
        let bigrams = IdatField::ALL
            .iter()
            .map(|&field| bigram_count(idat.get(field)))
            .sum();
        self.metrics
            .record_encoded(start.elapsed(), IdatField::ALL.len(), bigrams);
        Ok(record)
    }
}

fn bigram_count(value: &str) -> usize {
    value.chars().count() + 1
}

impl RecordEncodingApi for RecordEncodingService {
    fn encode_field(&self, value: &str, length: usize) -> Result<FieldBits, EncodingError> {
        let generator = FieldBloomFilterGenerator::new(length)?;
        let mut hasher = self.hashers.create();
        let bits = generator.generate(value, &mut *hasher);
        self.metrics.record_field_encoded(bigram_count(value));
        Ok(bits)
    }

    fn compose_record(
        &self,
        fields: Vec<FieldBloomFilter>,
        seed: i64,
        length: Option<usize>,
    ) -> Result<RecordVector, EncodingError> {
        let record = match length {
            Some(length) => RecordBloomFilter::with_length(length, fields, seed)?,
            None => RecordBloomFilter::new(fields, seed)?,
        };
        Ok(record.into_record_vector())
    }

    fn generate_record(&self, idat: &Idat) -> Result<RecordVector, EncodingError> {
        let mut hasher = self.hashers.create();
        self.encode_one(idat, &mut *hasher)
    }

    #[instrument(skip_all, fields(records = idats.len()))]
    fn generate_records(&self, idats: &[Idat]) -> Result<Vec<RecordVector>, EncodingError> {
        self.metrics.record_batch();

        let records = if idats.len() < PARALLEL_THRESHOLD {
            let mut hasher = self.hashers.create();
            idats
                .iter()
                .map(|idat| self.encode_one(idat, &mut *hasher))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            idats
                .par_iter()
                .map_init(
                    || self.hashers.create(),
                    |hasher, idat| self.encode_one(idat, &mut **hasher),
                )
                .collect::<Result<Vec<_>, _>>()?
        };

        debug!(records = records.len(), "Batch encoded");
        Ok(records)
    }
}
