//! Transaction records and the read-only stores that provide them.
//!
//! This module contains:
//! - The `Record` model and `RecordBuilder` for creating records
//! - The `RecordStore` trait that handlers read records through
//! - The built-in sample data set and functions for data files

mod load;
mod models;
mod sample;
mod store;

pub use load::{load_records, write_records};
pub use models::{Record, RecordBuilder, RecordId};
pub use sample::sample_records;
pub use store::{InMemoryRecordStore, RecordStore};

#[cfg(test)]
pub(crate) use store::test_stores::UnavailableRecordStore;
