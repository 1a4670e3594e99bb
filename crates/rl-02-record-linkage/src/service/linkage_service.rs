//! Linkage Service
//!
//! Implements [`RecordLinkageApi`] on top of the two matchers and records
//! metrics and traces for every run. Only counts and organization ids are
//! logged.

use std::sync::Arc;
use std::time::Instant;

use shared_types::TransferRecord;
use tracing::{debug, info, instrument};

use super::{FederatedMatcher, SingleOrganizationMatcher};
use crate::domain::{MatchConfig, MatchedPerson, Person};
use crate::error::LinkageError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::RecordLinkageApi;

/// Record linkage service of the trusted party.
pub struct LinkageService {
    config: MatchConfig,
    single: SingleOrganizationMatcher,
    federated: FederatedMatcher,
    metrics: Arc<dyn MetricsRecorder>,
}

impl LinkageService {
    pub fn new(config: MatchConfig) -> Result<Self, LinkageError> {
        config.validate()?;
        Ok(Self {
            config,
            single: SingleOrganizationMatcher::new(config),
            federated: FederatedMatcher::new(config),
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Attach a metrics recorder
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Decode the transfer records of one organization.
    pub fn persons_from_transfer(
        records: &[TransferRecord],
        record_length: usize,
    ) -> Result<Vec<Person>, LinkageError> {
        records
            .iter()
            .map(|record| Person::from_transfer(record, record_length))
            .collect()
    }
}

impl RecordLinkageApi for LinkageService {
    fn similarity(&self, a: &Person, b: &Person) -> f64 {
        self.metrics.record_similarity();
        a.similarity(b)
    }

    #[instrument(skip_all, fields(persons = persons.len()))]
    fn match_one(&self, persons: Vec<Person>) -> Vec<MatchedPerson> {
        let start = Instant::now();
        let count = persons.len();

        let clusters = self.single.match_persons(persons);

        self.metrics.record_run(start.elapsed(), count, clusters.len());
        debug!(clusters = clusters.len(), "Single-organization matching done");
        clusters
    }

    #[instrument(skip_all, fields(organizations = person_lists.len()))]
    fn match_federated(&self, person_lists: Vec<Vec<Person>>) -> Vec<MatchedPerson> {
        let start = Instant::now();
        let count: usize = person_lists.iter().map(Vec::len).sum();

        let clusters = self.federated.match_persons(person_lists);

        self.metrics.record_run(start.elapsed(), count, clusters.len());
        info!(
            persons = count,
            clusters = clusters.len(),
            strategy = %self.config.match_strategy,
            threshold = self.config.positive_match_threshold,
            "Federated matching done"
        );
        clusters
    }
}
