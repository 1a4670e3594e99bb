//! Research study key

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::PseudonymError;

/// Length of an AES-256 key in bytes.
pub const RESEARCH_STUDY_KEY_LENGTH: usize = 32;

/// AES-256 key protecting the pseudonyms of one research study.
///
/// Zeroized on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ResearchStudyKey([u8; RESEARCH_STUDY_KEY_LENGTH]);

impl ResearchStudyKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PseudonymError> {
        if bytes.len() != RESEARCH_STUDY_KEY_LENGTH {
            return Err(PseudonymError::InvalidKeyLength {
                expected: RESEARCH_STUDY_KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; RESEARCH_STUDY_KEY_LENGTH];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub fn generate() -> Self {
        let mut bytes = [0u8; RESEARCH_STUDY_KEY_LENGTH];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; RESEARCH_STUDY_KEY_LENGTH] {
        &self.0
    }

    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }
}

impl fmt::Debug for ResearchStudyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResearchStudyKey").finish_non_exhaustive()
    }
}
