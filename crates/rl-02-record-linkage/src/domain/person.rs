//! Persons and matched persons
//!
//! A [`Person`] is one record vector contributed by one organization. A
//! [`MatchedPerson`] is the insertion-ordered group of persons judged to be
//! the same individual. A matched person always has at least one member: the
//! only constructor takes the first member, and deserialization rejects empty
//! lists.

use std::iter;

use serde::{Deserialize, Serialize};
use shared_types::{OrganizationId, RecordVector, TransferRecord};

use crate::error::LinkageError;

/// One encoded person of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    organization_id: OrganizationId,
    local_id: Option<String>,
    record: RecordVector,
}

impl Person {
    pub fn new(
        organization_id: OrganizationId,
        local_id: Option<String>,
        record: RecordVector,
    ) -> Self {
        Self {
            organization_id,
            local_id,
            record,
        }
    }

    /// Decode a transferred person with a record vector of `record_length` bits.
    pub fn from_transfer(
        transfer: &TransferRecord,
        record_length: usize,
    ) -> Result<Self, LinkageError> {
        Ok(Self {
            organization_id: transfer.organization_id.clone(),
            local_id: transfer.local_id.clone(),
            record: transfer.record_vector(record_length)?,
        })
    }

    pub fn to_transfer(&self) -> TransferRecord {
        TransferRecord::new(
            self.organization_id.clone(),
            self.local_id.clone(),
            &self.record,
        )
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn local_id(&self) -> Option<&str> {
        self.local_id.as_deref()
    }

    pub fn record(&self) -> &RecordVector {
        &self.record
    }

    /// Popcount of the record vector.
    pub fn cardinality(&self) -> usize {
        self.record.cardinality()
    }

    /// Dice coefficient `2|A∩B| / (|A|+|B|)`, in `[0, 1]`.
    ///
    /// Two all-zero vectors carry no evidence and score 0.
    pub fn similarity(&self, other: &Person) -> f64 {
        let total = self.cardinality() + other.cardinality();
        if total == 0 {
            return 0.0;
        }
        let common = self.record.intersection_cardinality(&other.record);
        2.0 * common as f64 / total as f64
    }
}

/// Serialized form of a [`Person`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRecord {
    organization_id: OrganizationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    local_id: Option<String>,
    record_bloom_filter: String,
    record_length: usize,
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            record_bloom_filter: person.record.to_base64(),
            record_length: person.record.len(),
            organization_id: person.organization_id,
            local_id: person.local_id,
        }
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = LinkageError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            record: RecordVector::from_base64(&record.record_bloom_filter, record.record_length)?,
            organization_id: record.organization_id,
            local_id: record.local_id,
        })
    }
}

/// Persons judged to represent one individual, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Person>", into = "Vec<Person>")]
pub struct MatchedPerson {
    first: Person,
    rest: Vec<Person>,
}

impl MatchedPerson {
    /// Singleton cluster.
    pub fn new(first: Person) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    pub fn add_match(&mut self, person: Person) {
        self.rest.push(person);
    }

    /// Member added first.
    pub fn first(&self) -> &Person {
        &self.first
    }

    /// Member added last, the first member for singletons.
    pub fn last(&self) -> &Person {
        self.rest.last().unwrap_or(&self.first)
    }

    pub fn members(&self) -> impl Iterator<Item = &Person> + '_ {
        iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`; a matched person has at least one member.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_members(self) -> Vec<Person> {
        let mut members = Vec::with_capacity(self.len());
        members.push(self.first);
        members.extend(self.rest);
        members
    }
}

impl TryFrom<Vec<Person>> for MatchedPerson {
    type Error = LinkageError;

    fn try_from(members: Vec<Person>) -> Result<Self, Self::Error> {
        let mut members = members.into_iter();
        let first = members.next().ok_or(LinkageError::EmptyCluster)?;
        Ok(Self {
            first,
            rest: members.collect(),
        })
    }
}

impl From<MatchedPerson> for Vec<Person> {
    fn from(matched: MatchedPerson) -> Self {
        matched.into_members()
    }
}
