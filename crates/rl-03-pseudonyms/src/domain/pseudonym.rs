//! Pseudonym payloads
//!
//! The plaintext of a pseudonym is the JSON list of the cluster's medic ids,
//! padded with spaces so every plaintext of one run has the same byte length.
//! Ciphertext length then reveals nothing about cluster size.

use rl_02_record_linkage::MatchedPerson;
use serde::{Deserialize, Serialize};

use super::medic_id::MedicId;
use crate::error::PseudonymError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UnpaddedPayload<'a> {
    medic_ids: &'a [MedicId],
}

/// Decrypted pseudonym content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudonymPayload {
    pub medic_ids: Vec<MedicId>,
    #[serde(default)]
    pub padding: String,
}

/// Medic ids of one cluster together with their unpadded JSON length.
#[derive(Debug, Clone)]
pub(crate) struct ClusterIds {
    pub medic_ids: Vec<MedicId>,
    pub json_length: usize,
}

impl ClusterIds {
    pub fn from_cluster(cluster: &MatchedPerson) -> Result<Self, PseudonymError> {
        let medic_ids = cluster
            .members()
            .map(MedicId::from_person)
            .collect::<Result<Vec<_>, _>>()?;
        let json_length = serde_json::to_vec(&UnpaddedPayload {
            medic_ids: &medic_ids,
        })?
        .len();
        Ok(Self {
            medic_ids,
            json_length,
        })
    }

    /// Padded plaintext whose length depends only on `max_length`.
    pub fn padded_plaintext(self, max_length: usize) -> Result<Vec<u8>, PseudonymError> {
        let payload = PseudonymPayload {
            padding: " ".repeat(max_length.saturating_sub(self.json_length)),
            medic_ids: self.medic_ids,
        };
        Ok(serde_json::to_vec(&payload)?)
    }
}

/// A cluster with its encrypted pseudonym.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudonymizedPerson {
    pub pseudonym: String,
    pub matched_person: MatchedPerson,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rl_02_record_linkage::Person;
    use shared_types::{OrganizationId, RecordVector};

    fn cluster(ids: &[&str]) -> MatchedPerson {
        let persons: Vec<Person> = ids
            .iter()
            .map(|id| {
                Person::new(
                    OrganizationId::new("org"),
                    Some(id.to_string()),
                    RecordVector::zeroed(8),
                )
            })
            .collect();
        MatchedPerson::try_from(persons).unwrap()
    }

    #[test]
    fn test_padding_equalizes_plaintext_length() {
        let small = ClusterIds::from_cluster(&cluster(&["1"])).unwrap();
        let large = ClusterIds::from_cluster(&cluster(&["1", "22", "333"])).unwrap();
        let max = small.json_length.max(large.json_length);

        let a = small.padded_plaintext(max).unwrap();
        let b = large.padded_plaintext(max).unwrap();

        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_payload_parses_back() {
        let ids = ClusterIds::from_cluster(&cluster(&["7"])).unwrap();
        let plaintext = ids.padded_plaintext(100).unwrap();

        let payload: PseudonymPayload = serde_json::from_slice(&plaintext).unwrap();
        assert_eq!(payload.medic_ids, vec![MedicId::new("org", "7")]);
        assert!(payload.padding.chars().all(|c| c == ' '));
    }
}
