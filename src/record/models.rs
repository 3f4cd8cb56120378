//! Defines the record model shared by the aggregation engine and the transaction listing.

use serde::{Deserialize, Serialize};
use time::Date;

/// The ID of a record, unique within its data set.
///
/// IDs start at 1. Zero marks a record whose data file gave no ID.
pub type RecordId = u64;

/// A transaction-like listing: an item offered for sale at a price, in a
/// category, on a date.
///
/// Records are immutable once loaded. To create a new `Record`, use [Record::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// The ID of the record.
    ///
    /// Defaults to zero when absent, and [crate::load_records] then assigns
    /// the record's 1-based position in its file.
    #[serde(default)]
    pub id: RecordId,
    /// A short name for the item.
    #[serde(default)]
    pub title: String,
    /// A longer text description of the item.
    #[serde(default)]
    pub description: String,
    /// The listed price of the item. Never negative.
    pub price: f64,
    /// The category label of the item, e.g. "electronics". Never empty.
    pub category: String,
    /// The calendar date of the listing.
    ///
    /// Dates have no time of day or UTC offset, so the month of a record
    /// never depends on the server's timezone.
    pub date: Date,
    /// Whether the item has been sold.
    #[serde(default)]
    pub sold: bool,
}

impl Record {
    /// Create a new record.
    ///
    /// Shortcut for [RecordBuilder] for discoverability.
    pub fn build(price: f64, category: &str, date: Date) -> RecordBuilder {
        RecordBuilder {
            price,
            category: category.to_owned(),
            date,
            title: String::new(),
            description: String::new(),
            sold: false,
        }
    }

    /// Check the invariants that the aggregation engine relies on.
    ///
    /// # Errors
    /// Returns a description of the first broken invariant: a negative or
    /// non-finite price, or an empty category.
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() {
            return Err(format!("price {} is not a finite number", self.price));
        }

        if self.price < 0.0 {
            return Err(format!("price {} is negative", self.price));
        }

        if self.category.trim().is_empty() {
            return Err("category is empty".to_owned());
        }

        Ok(())
    }
}

/// A builder for creating [Record] instances.
///
/// The title and description default to empty strings and `sold` defaults to
/// `false`. Call [RecordBuilder::finalize] with an ID to get the [Record].
#[derive(Debug, PartialEq, Clone)]
pub struct RecordBuilder {
    /// The listed price of the item.
    pub price: f64,
    /// The category label of the item.
    pub category: String,
    /// The calendar date of the listing.
    pub date: Date,
    /// A short name for the item.
    pub title: String,
    /// A longer text description of the item.
    pub description: String,
    /// Whether the item has been sold.
    pub sold: bool,
}

impl RecordBuilder {
    /// Set the title of the record.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    /// Set the description of the record.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set whether the item has been sold.
    pub fn sold(mut self, sold: bool) -> Self {
        self.sold = sold;
        self
    }

    /// Create the [Record] with the given `id`.
    pub fn finalize(self, id: RecordId) -> Record {
        Record {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            date: self.date,
            sold: self.sold,
        }
    }
}
