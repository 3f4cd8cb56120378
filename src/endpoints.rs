//! The URIs for the dashboard pages, HTMX fragments and JSON API.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The HTMX fragment with a page of the transaction table.
pub const DASHBOARD_TRANSACTIONS: &str = "/dashboard/transactions";
/// The HTMX fragment with the monthly sales statistics.
pub const DASHBOARD_STATS: &str = "/dashboard/stats";
/// The HTMX fragment with the price range and category charts.
pub const DASHBOARD_PRICE_RANGE: &str = "/dashboard/price-range";

/// The route for listing a month's transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for a month's sales statistics.
pub const TRANSACTION_STATS_API: &str = "/api/transaction-stats";
/// The route for a month's price band counts with numeric bounds.
pub const PRICE_RANGE_API: &str = "/api/transaction-price-range";
/// The route for a month's labelled price band counts.
pub const BAR_CHART_API: &str = "/api/bar-chart";
/// The route for a month's category counts.
pub const PIE_CHART_API: &str = "/api/pie-chart";
/// The route for a month's bar chart and pie chart data together.
pub const COMBINED_CHART_API: &str = "/api/combined-chart";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_STATS);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_PRICE_RANGE);

        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION_STATS_API);
        assert_endpoint_is_valid_uri(endpoints::PRICE_RANGE_API);
        assert_endpoint_is_valid_uri(endpoints::BAR_CHART_API);
        assert_endpoint_is_valid_uri(endpoints::PIE_CHART_API);
        assert_endpoint_is_valid_uri(endpoints::COMBINED_CHART_API);
    }
}
