//! Pseudonym Generator
//!
//! A pseudonym is `base64(nonce || AES-256-GCM(padded medic id JSON))` with
//! the research study identifier as associated data, so a pseudonym only
//! decodes under the study it was issued for.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::seq::SliceRandom;
use rand::RngCore;
use rl_02_record_linkage::MatchedPerson;
use tracing::{debug, instrument};

use crate::domain::pseudonym::ClusterIds;
use crate::domain::{MedicId, PseudonymPayload, PseudonymizedPerson, ResearchStudyKey};
use crate::error::PseudonymError;
use crate::ports::PseudonymizationApi;

/// GCM nonce length in bytes.
pub const NONCE_LENGTH: usize = 12;

/// Creates and decodes the pseudonyms of one research study.
pub struct PseudonymGenerator {
    research_study_id: String,
    cipher: Aes256Gcm,
}

impl PseudonymGenerator {
    pub fn new(research_study_id: impl Into<String>, key: &ResearchStudyKey) -> Self {
        Self {
            research_study_id: research_study_id.into(),
            cipher: Aes256Gcm::new(key.as_bytes().into()),
        }
    }

    pub fn research_study_id(&self) -> &str {
        &self.research_study_id
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<String, PseudonymError> {
        let mut nonce = [0u8; NONCE_LENGTH];
        rand::thread_rng().fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: plaintext,
                    aad: self.research_study_id.as_bytes(),
                },
            )
            .map_err(|_| PseudonymError::EncryptionFailed)?;

        let mut output = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        output.extend_from_slice(&nonce);
        output.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(output))
    }

    fn decrypt(&self, pseudonym: &str) -> Result<Vec<u8>, PseudonymError> {
        let bytes = STANDARD.decode(pseudonym)?;
        if bytes.len() <= NONCE_LENGTH {
            return Err(PseudonymError::Truncated(bytes.len()));
        }
        let (nonce, ciphertext) = bytes.split_at(NONCE_LENGTH);

        self.cipher
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad: self.research_study_id.as_bytes(),
                },
            )
            .map_err(|_| PseudonymError::DecryptionFailed)
    }
}

impl PseudonymizationApi for PseudonymGenerator {
    #[instrument(skip_all, fields(clusters = clusters.len()))]
    fn create_pseudonyms_and_shuffle(
        &self,
        clusters: &[MatchedPerson],
    ) -> Result<Vec<PseudonymizedPerson>, PseudonymError> {
        let ids = clusters
            .iter()
            .map(ClusterIds::from_cluster)
            .collect::<Result<Vec<_>, _>>()?;
        let max_length = ids.iter().map(|c| c.json_length).max().unwrap_or(0);

        let mut pseudonymized = Vec::with_capacity(clusters.len());
        for (cluster, ids) in clusters.iter().zip(ids) {
            let plaintext = ids.padded_plaintext(max_length)?;
            pseudonymized.push(PseudonymizedPerson {
                pseudonym: self.encrypt(&plaintext)?,
                matched_person: cluster.clone(),
            });
        }

        pseudonymized.shuffle(&mut rand::thread_rng());

        debug!(max_length, "Pseudonyms created");
        Ok(pseudonymized)
    }

    fn decode_pseudonym(&self, pseudonym: &str) -> Result<Vec<MedicId>, PseudonymError> {
        let plaintext = self.decrypt(pseudonym)?;
        let payload: PseudonymPayload = serde_json::from_slice(&plaintext)?;
        Ok(payload.medic_ids)
    }
}
