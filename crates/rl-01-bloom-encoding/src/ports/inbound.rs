//! Inbound Ports (Driving Ports)
//!
//! The API a data holder uses to turn identifying data into record vectors.

use shared_types::{Idat, RecordVector};

use crate::domain::{FieldBits, FieldBloomFilter};
use crate::error::EncodingError;

/// Primary record encoding API (Driving Port)
pub trait RecordEncodingApi: Send + Sync {
    /// Encode one attribute value into a field vector of `length` bits.
    fn encode_field(&self, value: &str, length: usize) -> Result<FieldBits, EncodingError>;

    /// Compose weighted field filters into a record vector.
    ///
    /// # Arguments
    /// * `fields` - Field filters in composition order
    /// * `seed` - Permutation seed
    /// * `length` - Record length; derived from the fields when `None`
    fn compose_record(
        &self,
        fields: Vec<FieldBloomFilter>,
        seed: i64,
        length: Option<usize>,
    ) -> Result<RecordVector, EncodingError>;

    /// Encode one person with the configured lengths, weights and seed.
    fn generate_record(&self, idat: &Idat) -> Result<RecordVector, EncodingError>;

    /// Encode a batch; output order equals input order.
    fn generate_records(&self, idats: &[Idat]) -> Result<Vec<RecordVector>, EncodingError>;
}
