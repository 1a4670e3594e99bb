//! Candidate-to-cluster matching
//!
//! A candidate is scored against every cluster; the best score wins if it
//! reaches the threshold. Equal best scores resolve to the lowest cluster
//! index so repeated runs give identical clusters.

use super::config::MatchConfig;
use super::person::{MatchedPerson, Person};

/// Accepted match of a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Index into the cluster slice
    pub index: usize,
    /// Aggregated score, at least the threshold
    pub score: f64,
}

/// Best accepted cluster for `candidate`, `None` when no cluster reaches the
/// threshold.
pub fn best_match(
    candidate: &Person,
    clusters: &[MatchedPerson],
    config: &MatchConfig,
) -> Option<BestMatch> {
    let mut best: Option<BestMatch> = None;

    for (index, cluster) in clusters.iter().enumerate() {
        let score = config.match_strategy.score(cluster, candidate);
        if best.map_or(true, |b| score > b.score) {
            best = Some(BestMatch { index, score });
        }
    }

    best.filter(|b| config.accepts(b.score))
}
