//! # RL-03 Pseudonyms
//!
//! Research-study pseudonyms for the clusters produced by record linkage.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `MedicId`: Organization and local id of one cluster member
//!   - `ResearchStudyKey`: AES-256 key, zeroized on drop
//!   - `PseudonymPayload`, `PseudonymizedPerson`: Plaintext and result types
//!
//! - **Ports Layer** (`ports/`)
//!   - `PseudonymizationApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service/`)
//!   - `PseudonymGenerator`: AES-256-GCM encryption and decoding
//!
//! ## Invariants
//!
//! - **Equal length**: all pseudonyms of one run have the same length.
//! - **Study binding**: the research study id is authenticated as associated
//!   data; a pseudonym never decodes under another study.
//! - **Unlinkable order**: output order is shuffled.
//!
//! ## Usage Example
//!
//! ```ignore
//! use rl_03_pseudonyms::{PseudonymGenerator, PseudonymizationApi, ResearchStudyKey};
//!
//! let generator = PseudonymGenerator::new("study-1", &ResearchStudyKey::generate());
//! let pseudonyms = generator.create_pseudonyms_and_shuffle(&clusters)?;
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{
    MedicId, PseudonymPayload, PseudonymizedPerson, ResearchStudyKey, RESEARCH_STUDY_KEY_LENGTH,
};
pub use error::PseudonymError;
pub use ports::PseudonymizationApi;
pub use service::{PseudonymGenerator, NONCE_LENGTH};
