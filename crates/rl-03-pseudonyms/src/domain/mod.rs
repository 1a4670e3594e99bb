//! Domain layer for pseudonyms

pub mod key;
pub mod medic_id;
pub mod pseudonym;

pub use key::{ResearchStudyKey, RESEARCH_STUDY_KEY_LENGTH};
pub use medic_id::MedicId;
pub use pseudonym::{PseudonymPayload, PseudonymizedPerson};
