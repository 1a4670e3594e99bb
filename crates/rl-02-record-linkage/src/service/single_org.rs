//! Single-organization matcher (deduplication)
//!
//! A strict left-to-right fold: each person sees the clusters produced by
//! every person before it, so this pass is never parallelized.

use crate::domain::{best_match, MatchConfig, MatchedPerson, Person};

/// Clusters the persons of one organization.
#[derive(Debug, Clone, Default)]
pub struct SingleOrganizationMatcher {
    config: MatchConfig,
}

impl SingleOrganizationMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn match_persons(&self, persons: Vec<Person>) -> Vec<MatchedPerson> {
        let mut clusters: Vec<MatchedPerson> = Vec::new();

        for person in persons {
            match best_match(&person, &clusters, &self.config) {
                Some(best) => clusters[best.index].add_match(person),
                None => clusters.push(MatchedPerson::new(person)),
            }
        }

        clusters
    }
}
