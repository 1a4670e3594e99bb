//! In-memory identifying data source

use crate::error::EncodingError;
use crate::ports::{IdatProvider, LocalIdat};

/// Provider over records already loaded by the caller.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdatProvider {
    records: Vec<LocalIdat>,
}

impl InMemoryIdatProvider {
    pub fn new(records: Vec<LocalIdat>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: LocalIdat) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IdatProvider for InMemoryIdatProvider {
    fn load_idats(&self) -> Result<Vec<LocalIdat>, EncodingError> {
        Ok(self.records.clone())
    }
}
