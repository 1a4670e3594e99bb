//! Metrics hooks for record encoding
//!
//! Counts only. No attribute value, key or bit position is ever recorded.
//!
//! ## Usage
//!
//! ```ignore
//! use rl_01_bloom_encoding::metrics::{Metrics, MetricsRecorder};
//!
//! let metrics = Metrics::new();
//! let start = std::time::Instant::now();
//! let record = generator.generate(&idat, hasher.as_mut())?;
//! metrics.record_encoded(start.elapsed(), 9, 42);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Thread-safe counters for encoding throughput.
#[derive(Default)]
pub struct Metrics {
    /// Records encoded
    pub records_encoded: AtomicU64,
    /// Field filters generated
    pub fields_encoded: AtomicU64,
    /// Bigrams hashed (two digests each)
    pub bigrams_hashed: AtomicU64,
    /// Batches processed
    pub batches: AtomicU64,
    /// Cumulative record encoding time in nanoseconds
    pub encode_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one encoded record
    ///
    /// # Arguments
    /// * `duration` - Time taken for the record
    /// * `fields` - Field filters generated for it
    /// * `bigrams` - Bigrams hashed across all fields
    pub fn record_encoded(&self, duration: Duration, fields: usize, bigrams: usize) {
        self.records_encoded.fetch_add(1, Ordering::Relaxed);
        self.fields_encoded.fetch_add(fields as u64, Ordering::Relaxed);
        self.bigrams_hashed.fetch_add(bigrams as u64, Ordering::Relaxed);
        self.encode_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record a single field encoding outside a record
    pub fn record_field_encoded(&self, bigrams: usize) {
        self.fields_encoded.fetch_add(1, Ordering::Relaxed);
        self.bigrams_hashed.fetch_add(bigrams as u64, Ordering::Relaxed);
    }

    pub fn record_batch(&self) {
        self.batches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_encoded: self.records_encoded.load(Ordering::Relaxed),
            fields_encoded: self.fields_encoded.load(Ordering::Relaxed),
            bigrams_hashed: self.bigrams_hashed.load(Ordering::Relaxed),
            batches: self.batches.load(Ordering::Relaxed),
            avg_encode_ns: self.avg_encode_time_ns(),
        }
    }

    /// Average record encoding time in nanoseconds
    pub fn avg_encode_time_ns(&self) -> u64 {
        let total = self.encode_time_ns.load(Ordering::Relaxed);
        let count = self.records_encoded.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    pub fn reset(&self) {
        self.records_encoded.store(0, Ordering::Relaxed);
        self.fields_encoded.store(0, Ordering::Relaxed);
        self.bigrams_hashed.store(0, Ordering::Relaxed);
        self.batches.store(0, Ordering::Relaxed);
        self.encode_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub records_encoded: u64,
    pub fields_encoded: u64,
    pub bigrams_hashed: u64,
    pub batches: u64,
    pub avg_encode_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_encoded(&self, duration: Duration, fields: usize, bigrams: usize);

    fn record_field_encoded(&self, bigrams: usize);

    fn record_batch(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_encoded(&self, _: Duration, _: usize, _: usize) {}
    fn record_field_encoded(&self, _: usize) {}
    fn record_batch(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_encoded(&self, duration: Duration, fields: usize, bigrams: usize) {
        Metrics::record_encoded(self, duration, fields, bigrams);
    }

    fn record_field_encoded(&self, bigrams: usize) {
        Metrics::record_field_encoded(self, bigrams);
    }

    fn record_batch(&self) {
        Metrics::record_batch(self);
    }
}
