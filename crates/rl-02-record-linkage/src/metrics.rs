//! Metrics hooks for record linkage
//!
//! Provides instrumentation points for linkage runs: persons matched,
//! clusters produced and accepted matches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for linkage runs
#[derive(Default)]
pub struct Metrics {
    /// Linkage runs (single-organization and federated)
    pub runs: AtomicU64,
    /// Persons fed into the matchers
    pub persons_matched: AtomicU64,
    /// Clusters returned
    pub clusters_created: AtomicU64,
    /// Persons that joined an existing cluster
    pub matches_accepted: AtomicU64,
    /// Standalone similarity computations
    pub similarities_computed: AtomicU64,
    /// Cumulative run time in nanoseconds
    pub run_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished linkage run
    ///
    /// # Arguments
    /// * `duration` - Time taken for the run
    /// * `persons` - Persons in the input
    /// * `clusters` - Clusters in the output
    pub fn record_run(&self, duration: Duration, persons: usize, clusters: usize) {
        self.runs.fetch_add(1, Ordering::Relaxed);
        self.persons_matched.fetch_add(persons as u64, Ordering::Relaxed);
        self.clusters_created.fetch_add(clusters as u64, Ordering::Relaxed);
        self.matches_accepted
            .fetch_add(persons.saturating_sub(clusters) as u64, Ordering::Relaxed);
        self.run_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn record_similarity(&self) {
        self.similarities_computed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            persons_matched: self.persons_matched.load(Ordering::Relaxed),
            clusters_created: self.clusters_created.load(Ordering::Relaxed),
            matches_accepted: self.matches_accepted.load(Ordering::Relaxed),
            similarities_computed: self.similarities_computed.load(Ordering::Relaxed),
            avg_run_ns: self.avg_run_time_ns(),
        }
    }

    /// Average run time in nanoseconds
    pub fn avg_run_time_ns(&self) -> u64 {
        let total = self.run_time_ns.load(Ordering::Relaxed);
        let count = self.runs.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Share of persons that joined an existing cluster
    pub fn match_rate(&self) -> f64 {
        let persons = self.persons_matched.load(Ordering::Relaxed);
        let accepted = self.matches_accepted.load(Ordering::Relaxed);
        if persons > 0 {
            accepted as f64 / persons as f64
        } else {
            0.0
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub runs: u64,
    pub persons_matched: u64,
    pub clusters_created: u64,
    pub matches_accepted: u64,
    pub similarities_computed: u64,
    pub avg_run_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_run(&self, duration: Duration, persons: usize, clusters: usize);

    fn record_similarity(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_run(&self, _: Duration, _: usize, _: usize) {}
    fn record_similarity(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_run(&self, duration: Duration, persons: usize, clusters: usize) {
        Metrics::record_run(self, duration, persons, clusters);
    }

    fn record_similarity(&self) {
        Metrics::record_similarity(self);
    }
}
