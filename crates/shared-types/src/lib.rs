//! # Shared Types Crate
//!
//! This crate contains the entities exchanged between data holders
//! (organizations) and the trusted linkage party.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The identifying-data record ([`Idat`]), the
//!   record bit vector ([`RecordVector`]) and the transfer record are defined
//!   here once for both sides of the linkage.
//! - **No plaintext leakage**: [`Idat`] never prints its values, not even in
//!   `Debug` output.
//! - **Stable interchange**: a [`RecordVector`] crosses organization
//!   boundaries as the Base64 encoding of its raw bytes, least significant
//!   bit first.

pub mod entities;
pub mod errors;
pub mod record_vector;
pub mod transfer;

pub use entities::*;
pub use errors::*;
pub use record_vector::{RecordVector, MAX_RECORD_BITS};
pub use transfer::{TransferBatch, TransferRecord};
