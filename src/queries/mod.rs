//! The queries behind the JSON API and the dashboard fragments.
//!
//! Queries take the full record set and recompute their results on every call.

mod charts;
mod listing;
mod params;

pub use charts::{
    CombinedChart, PriceRanges, bar_chart, combined_chart, month_stats, pie_chart, price_ranges,
};
pub use listing::{TransactionPage, list_transactions};
pub use params::{ListQuery, ListSelection, MonthQuery, month_number};
