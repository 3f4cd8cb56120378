//! The month-filtered aggregation engine.
//!
//! Every function here is a pure function over borrowed records, so the
//! results can be computed for any request without locking the record store.

mod category;
mod month;
mod price_band;
mod sales;

pub use category::{CategoryCount, group_by_category};
pub use month::filter_by_month;
pub use price_band::{
    BandCount, BoundedBandCount, LabelledBandCount, PRICE_BAND_COUNT, PriceBand, bucket_by_price,
};
pub use sales::{SalesSummary, summarize_sales};
