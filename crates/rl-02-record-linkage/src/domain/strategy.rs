//! Match strategies
//!
//! A strategy turns the similarities between a candidate and the members of
//! a matched person into one score. Each strategy tag maps to an aggregation
//! function over the member scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::person::{MatchedPerson, Person};
use crate::error::LinkageError;

/// Aggregation over member similarities, in member insertion order.
pub type Aggregation = fn(&[f64]) -> f64;

/// How a candidate is scored against a matched person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStrategy {
    /// Against the first member only
    First,
    /// Against the last member only
    Last,
    /// Best member similarity
    Max,
    /// Worst member similarity
    #[default]
    Min,
    /// Mean of the member similarities
    Avg,
    /// Median of the member similarities
    Median,
}

impl MatchStrategy {
    pub const ALL: [MatchStrategy; 6] = [
        MatchStrategy::First,
        MatchStrategy::Last,
        MatchStrategy::Max,
        MatchStrategy::Min,
        MatchStrategy::Avg,
        MatchStrategy::Median,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatchStrategy::First => "FIRST",
            MatchStrategy::Last => "LAST",
            MatchStrategy::Max => "MAX",
            MatchStrategy::Min => "MIN",
            MatchStrategy::Avg => "AVG",
            MatchStrategy::Median => "MEDIAN",
        }
    }

    pub fn aggregation(self) -> Aggregation {
        match self {
            MatchStrategy::First => first,
            MatchStrategy::Last => last,
            MatchStrategy::Max => max,
            MatchStrategy::Min => min,
            MatchStrategy::Avg => avg,
            MatchStrategy::Median => median,
        }
    }

    /// Score `candidate` against `cluster`.
    ///
    /// FIRST and LAST compute a single similarity; the other strategies
    /// compare against every member.
    pub fn score(self, cluster: &MatchedPerson, candidate: &Person) -> f64 {
        match self {
            MatchStrategy::First => cluster.first().similarity(candidate),
            MatchStrategy::Last => cluster.last().similarity(candidate),
            _ => {
                let scores: Vec<f64> = cluster
                    .members()
                    .map(|member| member.similarity(candidate))
                    .collect();
                (self.aggregation())(&scores)
            }
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchStrategy {
    type Err = LinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        MatchStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == upper)
            .ok_or_else(|| LinkageError::UnknownStrategy(s.to_string()))
    }
}

// Empty input is unreachable through MatchedPerson; every function still
// returns 0.0 for it instead of panicking.

fn first(scores: &[f64]) -> f64 {
    scores.first().copied().unwrap_or(0.0)
}

fn last(scores: &[f64]) -> f64 {
    scores.last().copied().unwrap_or(0.0)
}

fn max(scores: &[f64]) -> f64 {
    scores.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

fn min(scores: &[f64]) -> f64 {
    scores.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

fn avg(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn median(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{OrganizationId, RecordVector};

    fn person(positions: &[usize]) -> Person {
        Person::new(
            OrganizationId::new("org"),
            None,
            RecordVector::from_positions(32, positions.iter().copied()),
        )
    }

    #[test]
    fn test_default_is_min() {
        assert_eq!(MatchStrategy::default(), MatchStrategy::Min);
    }

    #[test]
    fn test_aggregations() {
        let scores = [0.5, 0.9, 0.7];

        assert_eq!((MatchStrategy::First.aggregation())(&scores), 0.5);
        assert_eq!((MatchStrategy::Last.aggregation())(&scores), 0.7);
        assert_eq!((MatchStrategy::Max.aggregation())(&scores), 0.9);
        assert_eq!((MatchStrategy::Min.aggregation())(&scores), 0.5);
        assert!(((MatchStrategy::Avg.aggregation())(&scores) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[0.9, 0.1, 0.5]), 0.5);
        assert_eq!(median(&[0.9, 0.1, 0.5, 0.7]), 0.6, "Even counts average the middle pair");
        assert_eq!(median(&[0.3]), 0.3);
    }

    #[test]
    fn test_empty_scores_do_not_panic() {
        for strategy in MatchStrategy::ALL {
            assert_eq!((strategy.aggregation())(&[]), 0.0, "{}", strategy);
        }
    }

    #[test]
    fn test_first_and_last_use_only_their_member() {
        let mut cluster = MatchedPerson::new(person(&[0, 1, 2, 3]));
        cluster.add_match(person(&[10, 11, 12, 13]));
        let candidate = person(&[0, 1, 2, 3]);

        assert_eq!(MatchStrategy::First.score(&cluster, &candidate), 1.0);
        assert_eq!(MatchStrategy::Last.score(&cluster, &candidate), 0.0);
        assert_eq!(MatchStrategy::Max.score(&cluster, &candidate), 1.0);
        assert_eq!(MatchStrategy::Min.score(&cluster, &candidate), 0.0);
        assert_eq!(MatchStrategy::Avg.score(&cluster, &candidate), 0.5);
        assert_eq!(MatchStrategy::Median.score(&cluster, &candidate), 0.5);
    }

    #[test]
    fn test_parse_and_serialize_names() {
        assert_eq!("median".parse::<MatchStrategy>().unwrap(), MatchStrategy::Median);
        assert!(matches!(
            "NONE".parse::<MatchStrategy>(),
            Err(LinkageError::UnknownStrategy(_))
        ));
        assert_eq!(serde_json::to_string(&MatchStrategy::Avg).unwrap(), "\"AVG\"");
    }
}
