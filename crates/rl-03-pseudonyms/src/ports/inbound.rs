//! Driving port of the pseudonym subsystem

use rl_02_record_linkage::MatchedPerson;

use crate::domain::{MedicId, PseudonymizedPerson};
use crate::error::PseudonymError;

/// Pseudonym assignment at the trusted linkage party.
pub trait PseudonymizationApi {
    /// Encrypts one pseudonym per cluster and returns them in random order.
    fn create_pseudonyms_and_shuffle(
        &self,
        clusters: &[MatchedPerson],
    ) -> Result<Vec<PseudonymizedPerson>, PseudonymError>;

    /// Recovers the medic ids behind a pseudonym of the same research study.
    fn decode_pseudonym(&self, pseudonym: &str) -> Result<Vec<MedicId>, PseudonymError>;
}
