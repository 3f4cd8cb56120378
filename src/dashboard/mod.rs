//! Dashboard module
//!
//! Provides a page for browsing one month of transactions: a paged, searchable
//! table, the month's sales statistics and charts of the price ranges and
//! categories. Each section is refreshed by its own HTMX fragment.

mod charts;
mod handlers;
mod views;

pub use handlers::{
    get_dashboard_page, get_price_range_fragment, get_stats_fragment, get_transactions_fragment,
};
