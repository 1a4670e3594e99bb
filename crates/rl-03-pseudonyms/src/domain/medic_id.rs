//! Local identifiers of matched persons

use std::fmt;

use rl_02_record_linkage::Person;
use serde::{Deserialize, Serialize};

use crate::error::PseudonymError;

/// Local identifier of a person at one organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicId {
    pub organization: String,
    pub value: String,
}

impl MedicId {
    pub fn new(organization: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            value: value.into(),
        }
    }

    /// Identifier of `person`; persons encoded without a local id have none.
    pub fn from_person(person: &Person) -> Result<Self, PseudonymError> {
        let organization = person.organization_id().as_str();
        match person.local_id() {
            Some(value) => Ok(Self::new(organization, value)),
            None => Err(PseudonymError::MissingLocalId {
                organization: organization.to_string(),
            }),
        }
    }
}

impl fmt::Display for MedicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.value)
    }
}
