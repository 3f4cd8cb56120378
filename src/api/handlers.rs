//! Route handlers for the JSON API.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
};
use time::Month;

use crate::{
    AppState, Error,
    aggregation::{CategoryCount, LabelledBandCount, SalesSummary},
    pagination::PaginationConfig,
    queries::{
        CombinedChart, ListQuery, MonthQuery, PriceRanges, TransactionPage, bar_chart,
        combined_chart, list_transactions, month_stats, pie_chart, price_ranges,
    },
    record::{Record, RecordStore},
};

/// The state needed by the JSON API handlers.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// The read-only source of records.
    pub record_store: Arc<dyn RecordStore>,
    /// The default page and page size for the transaction listing.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for ApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

impl ApiState {
    fn records(&self) -> Result<&[Record], Error> {
        self.record_store
            .fetch_all()
            .inspect_err(|error| tracing::error!("Could not fetch records: {error}"))
    }
}

/// Parse the month from the query string of a month-only endpoint.
fn requested_month(
    query: Result<Query<MonthQuery>, QueryRejection>,
    endpoint: &str,
) -> Result<Month, Error> {
    query
        .map_err(Error::from)
        .and_then(|Query(query)| query.month())
        .inspect_err(|error| tracing::debug!("Rejected {endpoint} query: {error}"))
}

/// List a page of the selected month's transactions, optionally filtered by a search term.
pub async fn get_transactions(
    State(state): State<ApiState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<TransactionPage>, Error> {
    let selection = query
        .map_err(Error::from)
        .and_then(|Query(query)| query.selection(state.pagination_config.default_page))
        .inspect_err(|error| tracing::debug!("Rejected transaction listing query: {error}"))?;
    let records = state.records()?;

    Ok(Json(list_transactions(
        records,
        &selection,
        state.pagination_config.page_size,
    )))
}

/// Get the sales totals for the selected month.
pub async fn get_transaction_stats(
    State(state): State<ApiState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<SalesSummary>, Error> {
    let month = requested_month(query, "transaction stats")?;

    Ok(Json(month_stats(state.records()?, month)))
}

/// Get the number of transactions in each price band with numeric bounds.
pub async fn get_price_range(
    State(state): State<ApiState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<PriceRanges>, Error> {
    let month = requested_month(query, "price range")?;

    Ok(Json(price_ranges(state.records()?, month)))
}

/// Get the number of transactions in each labelled price band.
pub async fn get_bar_chart(
    State(state): State<ApiState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<LabelledBandCount>>, Error> {
    let month = requested_month(query, "bar chart")?;

    Ok(Json(bar_chart(state.records()?, month)))
}

/// Get the number of transactions in each category.
pub async fn get_pie_chart(
    State(state): State<ApiState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<CategoryCount>>, Error> {
    let month = requested_month(query, "pie chart")?;

    Ok(Json(pie_chart(state.records()?, month)))
}

/// Get the bar chart and pie chart data in one response.
pub async fn get_combined_chart(
    State(state): State<ApiState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<CombinedChart>, Error> {
    let month = requested_month(query, "combined chart")?;

    Ok(Json(combined_chart(state.records()?, month)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use time::macros::date;

    use crate::{
        AppState, build_router, endpoints,
        pagination::PaginationConfig,
        record::{InMemoryRecordStore, Record, RecordStore, UnavailableRecordStore},
    };

    fn two_month_records() -> Vec<Record> {
        vec![
            Record::build(50.0, "A", date!(2024 - 01 - 10))
                .title("Mug")
                .sold(true)
                .finalize(1),
            Record::build(150.0, "B", date!(2024 - 01 - 20))
                .title("Kettle")
                .finalize(2),
            Record::build(250.0, "A", date!(2024 - 02 - 10))
                .title("Toaster")
                .finalize(3),
        ]
    }

    fn get_test_server(record_store: Arc<dyn RecordStore>) -> TestServer {
        let state = AppState::new(record_store, "Etc/UTC", PaginationConfig::default())
            .expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn get_example_server() -> TestServer {
        get_test_server(Arc::new(InMemoryRecordStore::new(two_month_records())))
    }

    #[tokio::test]
    async fn bar_chart_counts_january_bands() {
        let server = get_example_server();

        let response = server
            .get(endpoints::BAR_CHART_API)
            .add_query_param("month", "1")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let bands = body.as_array().expect("want a JSON array");
        assert_eq!(bands.len(), 10);
        assert_eq!(bands[0], json!({"range": "0-100", "count": 1}));
        assert_eq!(bands[1], json!({"range": "101-200", "count": 1}));
        assert_eq!(bands[9], json!({"range": "901-above", "count": 0}));
    }

    #[tokio::test]
    async fn pie_chart_lists_categories_in_order() {
        let server = get_example_server();

        let response = server
            .get(endpoints::PIE_CHART_API)
            .add_query_param("month", "1")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!([
            {"category": "A", "count": 1},
            {"category": "B", "count": 1},
        ]));
    }

    #[tokio::test]
    async fn combined_chart_matches_separate_endpoints() {
        let server = get_test_server(Arc::new(InMemoryRecordStore::with_sample_data()));

        let combined = server
            .get(endpoints::COMBINED_CHART_API)
            .add_query_param("month", "3")
            .await
            .json::<Value>();
        let bar = server
            .get(endpoints::BAR_CHART_API)
            .add_query_param("month", "3")
            .await
            .json::<Value>();
        let pie = server
            .get(endpoints::PIE_CHART_API)
            .add_query_param("month", "3")
            .await
            .json::<Value>();

        assert_eq!(combined["barChart"], bar);
        assert_eq!(combined["pieChart"], pie);
    }

    #[tokio::test]
    async fn price_range_has_null_upper_bound_for_last_band() {
        let server = get_example_server();

        let response = server
            .get(endpoints::PRICE_RANGE_API)
            .add_query_param("month", "2")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["ranges"][2], json!({"min": 201, "max": 300, "count": 1}));
        assert_eq!(body["ranges"][9], json!({"min": 901, "max": null, "count": 0}));
    }

    #[tokio::test]
    async fn stats_for_january() {
        let server = get_example_server();

        let response = server
            .get(endpoints::TRANSACTION_STATS_API)
            .add_query_param("month", "1")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "totalSales": 50.0,
            "soldItems": 1,
            "notSoldItems": 1,
        }));
    }

    #[tokio::test]
    async fn transactions_are_searched_and_paged() {
        let server = get_example_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("month", "1")
            .add_query_param("search", "KETTLE")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["totalCount"], 1);
        assert_eq!(body["page"], 1);
        assert_eq!(body["perPage"], 10);
        assert_eq!(body["pageCount"], 1);
        assert_eq!(body["transactions"][0]["title"], "Kettle");
        assert_eq!(body["notSoldItems"], 1);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let server = get_example_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("month", "1")
            .add_query_param("page", "5")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["transactions"], json!([]));
        assert_eq!(body["totalCount"], 2);
    }

    #[tokio::test]
    async fn invalid_month_is_a_bad_request() {
        let server = get_example_server();

        for month in ["13", "0", "abc", ""] {
            let response = server
                .get(endpoints::BAR_CHART_API)
                .add_query_param("month", month)
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let body = response.json::<Value>();
            assert!(
                body["error"].is_string(),
                "want error message for month {month:?}, got {body}"
            );
        }
    }

    #[tokio::test]
    async fn missing_month_is_a_bad_request() {
        let server = get_example_server();

        for endpoint in [
            endpoints::TRANSACTIONS_API,
            endpoints::TRANSACTION_STATS_API,
            endpoints::PRICE_RANGE_API,
            endpoints::BAR_CHART_API,
            endpoints::PIE_CHART_API,
            endpoints::COMBINED_CHART_API,
        ] {
            let response = server.get(endpoint).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({
                "error": "the query parameter \"month\" is required"
            }));
        }
    }

    #[tokio::test]
    async fn repeated_month_is_a_json_bad_request() {
        let server = get_example_server();

        for endpoint in [endpoints::TRANSACTIONS_API, endpoints::BAR_CHART_API] {
            let response = server
                .get(endpoint)
                .add_raw_query_param("month=1&month=2")
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let body = response.json::<Value>();
            let message = body["error"].as_str().expect("want JSON error message");
            assert!(message.contains("duplicate field"), "got {message}");
        }
    }

    #[tokio::test]
    async fn invalid_page_is_a_bad_request() {
        let server = get_example_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("month", "1")
            .add_query_param("page", "0")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_failure_is_an_internal_server_error() {
        let server = get_test_server(Arc::new(UnavailableRecordStore));

        let response = server
            .get(endpoints::COMBINED_CHART_API)
            .add_query_param("month", "1")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert!(body["error"].is_string(), "got {body}");
    }
}
