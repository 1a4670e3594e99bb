//! Federated matcher (linkage across organizations)
//!
//! ## Algorithm
//!
//! 1. The largest list (first one on equal sizes) seeds singleton clusters.
//! 2. Every remaining list, in input order, is matched against a snapshot of
//!    the clusters formed before it. Persons of one list are independent of
//!    each other, so this map runs in parallel.
//! 3. Results are folded in list order: matches join their snapshot cluster,
//!    misses become new singletons appended after the snapshot.
//!
//! Persons of the same list never match each other.

use rayon::prelude::*;

use crate::domain::{best_match, MatchConfig, MatchedPerson, Person};

/// Parallel threshold - use sequential for small lists.
pub const PARALLEL_THRESHOLD: usize = 8;

/// Clusters the person lists of several organizations.
#[derive(Debug, Clone, Default)]
pub struct FederatedMatcher {
    config: MatchConfig,
}

impl FederatedMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn match_persons(&self, mut person_lists: Vec<Vec<Person>>) -> Vec<MatchedPerson> {
        match person_lists.len() {
            0 => return Vec::new(),
            1 => return singletons(person_lists.remove(0)),
            _ => {}
        }

        let largest = largest_list(&person_lists);
        let mut clusters = singletons(person_lists.remove(largest));

        for list in person_lists {
            clusters = self.match_list(list, clusters);
        }

        clusters
    }

    fn match_list(&self, list: Vec<Person>, mut clusters: Vec<MatchedPerson>) -> Vec<MatchedPerson> {
        let snapshot = &clusters;
        let assignments: Vec<Option<usize>> = if list.len() < PARALLEL_THRESHOLD {
            list.iter()
                .map(|person| best_match(person, snapshot, &self.config).map(|b| b.index))
                .collect()
        } else {
            list.par_iter()
                .map(|person| best_match(person, snapshot, &self.config).map(|b| b.index))
                .collect()
        };

        let mut created = Vec::new();
        for (person, assignment) in list.into_iter().zip(assignments) {
            match assignment {
                Some(index) => clusters[index].add_match(person),
                None => created.push(MatchedPerson::new(person)),
            }
        }

        clusters.extend(created);
        clusters
    }
}

/// Index of the first longest list.
fn largest_list(person_lists: &[Vec<Person>]) -> usize {
    let mut largest = 0;
    for (index, list) in person_lists.iter().enumerate() {
        if list.len() > person_lists[largest].len() {
            largest = index;
        }
    }
    largest
}

fn singletons(persons: Vec<Person>) -> Vec<MatchedPerson> {
    persons.into_iter().map(MatchedPerson::new).collect()
}
