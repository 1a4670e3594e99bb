//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identifying data**: [`Idat`], [`IdatField`]
//! - **Organizations**: [`OrganizationId`]

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// CLUSTER A: IDENTIFYING DATA
// =============================================================================

/// Number of identifying fields in an [`Idat`] record.
pub const IDAT_FIELD_COUNT: usize = 9;

/// One identifying attribute of a person.
///
/// The declaration order is the canonical composition order of the record
/// Bloom filter. Changing it changes every record vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdatField {
    FirstName,
    LastName,
    Birthday,
    Sex,
    Street,
    ZipCode,
    City,
    Country,
    InsuranceNumber,
}

impl IdatField {
    /// All fields in composition order.
    pub const ALL: [IdatField; IDAT_FIELD_COUNT] = [
        IdatField::FirstName,
        IdatField::LastName,
        IdatField::Birthday,
        IdatField::Sex,
        IdatField::Street,
        IdatField::ZipCode,
        IdatField::City,
        IdatField::Country,
        IdatField::InsuranceNumber,
    ];

    /// Position of the field in composition order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable field name, used in configuration files and log fields.
    pub fn name(self) -> &'static str {
        match self {
            IdatField::FirstName => "firstName",
            IdatField::LastName => "lastName",
            IdatField::Birthday => "birthday",
            IdatField::Sex => "sex",
            IdatField::Street => "street",
            IdatField::ZipCode => "zipCode",
            IdatField::City => "city",
            IdatField::Country => "country",
            IdatField::InsuranceNumber => "insuranceNumber",
        }
    }
}

impl fmt::Display for IdatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifying attribute data of one person.
///
/// Exists only transiently at the encoding site. The `Debug` implementation is
/// redacted so that a stray `{:?}` can never write plaintext to a log.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Idat {
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
    pub sex: String,
    pub street: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub insurance_number: String,
}

impl Idat {
    /// Value of a single field.
    pub fn get(&self, field: IdatField) -> &str {
        match field {
            IdatField::FirstName => &self.first_name,
            IdatField::LastName => &self.last_name,
            IdatField::Birthday => &self.birthday,
            IdatField::Sex => &self.sex,
            IdatField::Street => &self.street,
            IdatField::ZipCode => &self.zip_code,
            IdatField::City => &self.city,
            IdatField::Country => &self.country,
            IdatField::InsuranceNumber => &self.insurance_number,
        }
    }
}

impl fmt::Debug for Idat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Idat").finish_non_exhaustive()
    }
}

// =============================================================================
// CLUSTER B: ORGANIZATIONS
// =============================================================================

/// Identifier of a data holder taking part in a linkage run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(pub String);

impl OrganizationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrganizationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
