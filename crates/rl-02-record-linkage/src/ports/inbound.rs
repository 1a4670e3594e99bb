//! Inbound Ports (Driving Ports)
//!
//! The API the trusted linkage party uses to cluster record vectors.

use crate::domain::{MatchedPerson, Person};

/// Primary record linkage API (Driving Port)
pub trait RecordLinkageApi: Send + Sync {
    /// Dice similarity of two persons.
    fn similarity(&self, a: &Person, b: &Person) -> f64;

    /// Deduplicate the persons of one organization.
    ///
    /// Persons are matched left to right against the clusters formed so far.
    fn match_one(&self, persons: Vec<Person>) -> Vec<MatchedPerson>;

    /// Link the person lists of several organizations.
    ///
    /// Every input person appears in exactly one returned cluster.
    fn match_federated(&self, person_lists: Vec<Vec<Person>>) -> Vec<MatchedPerson>;
}
