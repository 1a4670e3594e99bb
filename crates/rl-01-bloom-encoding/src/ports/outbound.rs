//! Outbound Ports (Driven Ports)
//!
//! The encoder reads identifying data from the data holder's local store.
//! The store itself is outside this crate.

use serde::{Deserialize, Serialize};
use shared_types::Idat;

use crate::error::EncodingError;

/// Identifying data of one person with its organization-scoped id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalIdat {
    pub local_id: String,
    pub idat: Idat,
}

/// Identifying data provider (Driven Port)
pub trait IdatProvider: Send + Sync {
    /// All records to encode, in a stable order.
    fn load_idats(&self) -> Result<Vec<LocalIdat>, EncodingError>;
}
