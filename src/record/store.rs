//! Read-only record stores that provide the data set for every query.

use std::fmt::Debug;

use crate::{
    Error,
    record::{Record, sample_records},
};

/// A read-only source of records.
///
/// Implementations are loaded once at start up and never mutated, so they can
/// be shared between requests without locking.
pub trait RecordStore: Debug + Send + Sync {
    /// Get every record in the store, in load order.
    ///
    /// # Errors
    /// Returns [Error::RecordStoreUnavailable] if the records cannot be read.
    fn fetch_all(&self) -> Result<&[Record], Error>;
}

/// A record store that holds its records in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRecordStore {
    records: Vec<Record>,
}

impl InMemoryRecordStore {
    /// Create a store that serves `records` in the given order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Create a store with the built-in sample data set.
    pub fn with_sample_data() -> Self {
        Self::new(sample_records())
    }

    /// The number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn fetch_all(&self) -> Result<&[Record], Error> {
        Ok(&self.records)
    }
}
