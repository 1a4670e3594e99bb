//! Transfer record
//!
//! The wire contract between a data holder and the trusted linkage party.
//! A record vector travels as a Base64 string next to the organization id and,
//! unless the fully de-identified variant is used, an organization-scoped
//! local identifier.

use serde::{Deserialize, Serialize};

use crate::entities::OrganizationId;
use crate::errors::InterchangeError;
use crate::record_vector::RecordVector;

/// One encoded person as exchanged between organizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub organization_id: OrganizationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
    pub record_bloom_filter: String,
}

impl TransferRecord {
    /// Transfer form of an encoded person.
    pub fn new(
        organization_id: OrganizationId,
        local_id: Option<String>,
        record: &RecordVector,
    ) -> Self {
        Self {
            organization_id,
            local_id,
            record_bloom_filter: record.to_base64(),
        }
    }

    /// Organization-only variant, no local identifier leaves the data holder.
    pub fn without_local_id(organization_id: OrganizationId, record: &RecordVector) -> Self {
        Self::new(organization_id, None, record)
    }

    /// Decode the carried vector, expecting `record_length` bits.
    pub fn record_vector(&self, record_length: usize) -> Result<RecordVector, InterchangeError> {
        RecordVector::from_base64(&self.record_bloom_filter, record_length)
    }
}

/// The encoded persons of one organization with their common vector length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferBatch {
    pub record_length: usize,
    pub records: Vec<TransferRecord>,
}

impl TransferBatch {
    pub fn new(record_length: usize, records: Vec<TransferRecord>) -> Self {
        Self {
            record_length,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
