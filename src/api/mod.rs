//! The JSON API for a month's transactions, statistics and chart data.
//!
//! Every endpoint takes its parameters from the query string and reads the
//! full record set, so no request depends on another.

mod handlers;

pub use handlers::{
    get_bar_chart, get_combined_chart, get_pie_chart, get_price_range, get_transaction_stats,
    get_transactions,
};
