//! Dashboard HTTP handlers.
//!
//! This module contains:
//! - The route handler for the full dashboard page
//! - The route handlers for the HTMX fragments that refresh each section
//! - The state used by the handlers

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, RawQuery, State, rejection::QueryRejection},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::{HX_PUSH_URL, HxRequest};
use maud::Markup;

use crate::{
    AppState, Error,
    dashboard::{
        charts::build_dashboard_charts,
        views::{dashboard_view, stats_view, transactions_view},
    },
    endpoints,
    pagination::PaginationConfig,
    queries::{
        ListQuery, ListSelection, MonthQuery, bar_chart, list_transactions, month_stats, pie_chart,
    },
    record::{Record, RecordStore},
    timezone::current_month,
};

use super::charts::charts_view;

/// The state needed for displaying the dashboard page.
///
/// Contains the record store, the timezone used to pick the default month
/// and the page size for the transaction table.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The read-only source of records.
    pub record_store: Arc<dyn RecordStore>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The default page and page size for the transaction table.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
            local_timezone: state.local_timezone.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

impl DashboardState {
    fn records(&self) -> Result<&[Record], Error> {
        self.record_store
            .fetch_all()
            .inspect_err(|error| tracing::error!("Could not fetch records: {error}"))
    }
}

/// Display the dashboard for the month, page and search term in the query string.
///
/// Requests without a month are redirected to the current month in the
/// server's local timezone.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejected_query(rejection).into_page_response(),
    };

    let has_month = query
        .month
        .as_deref()
        .is_some_and(|month| !month.trim().is_empty());

    if !has_month {
        return match redirect_to_current_month(&state, &query) {
            Ok(redirect) => redirect.into_response(),
            Err(error) => error.into_page_response(),
        };
    }

    match build_dashboard_page(&state, &query) {
        Ok(page) => page.into_response(),
        Err(error) => error.into_page_response(),
    }
}

fn redirect_to_current_month(state: &DashboardState, query: &ListQuery) -> Result<Redirect, Error> {
    let month = current_month(&state.local_timezone).inspect_err(|error| {
        tracing::error!("Could not get the current month: {error}");
    })?;

    let selection = ListSelection {
        month,
        page: state.pagination_config.default_page,
        search: query.search.as_deref().unwrap_or_default().trim().to_owned(),
    };

    Ok(Redirect::to(&selection.to_url(endpoints::DASHBOARD_VIEW)))
}

fn build_dashboard_page(state: &DashboardState, query: &ListQuery) -> Result<Markup, Error> {
    let selection = query.selection(state.pagination_config.default_page)?;
    let records = state.records()?;

    let listing = list_transactions(records, &selection, state.pagination_config.page_size);
    let stats = month_stats(records, selection.month);
    let charts = build_dashboard_charts(
        selection.month,
        &bar_chart(records, selection.month),
        &pie_chart(records, selection.month),
    );

    Ok(dashboard_view(&selection, &listing, &stats, &charts))
}

fn rejected_query(rejection: QueryRejection) -> Error {
    let error = Error::from(rejection);
    tracing::debug!("Rejected dashboard query: {error}");
    error
}

/// Redirect requests for a fragment that did not come from HTMX to the full page.
fn redirect_to_dashboard(raw_query: Option<String>) -> Response {
    let url = match raw_query {
        Some(query) if !query.is_empty() => format!("{}?{query}", endpoints::DASHBOARD_VIEW),
        _ => endpoints::DASHBOARD_VIEW.to_owned(),
    };

    Redirect::to(&url).into_response()
}

/// Render a page of the transaction table.
///
/// The response pushes the matching dashboard URL into the browser history,
/// so a reload shows the same month, page and search term.
pub async fn get_transactions_fragment(
    State(state): State<DashboardState>,
    HxRequest(is_htmx): HxRequest,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    if !is_htmx {
        return redirect_to_dashboard(raw_query);
    }

    let render = || -> Result<Response, Error> {
        let Query(query) = query.map_err(rejected_query)?;
        let selection = query.selection(state.pagination_config.default_page)?;
        let listing = list_transactions(
            state.records()?,
            &selection,
            state.pagination_config.page_size,
        );
        let dashboard_url = selection.to_url(endpoints::DASHBOARD_VIEW);

        Ok((
            [(HX_PUSH_URL, dashboard_url)],
            transactions_view(&selection, &listing),
        )
            .into_response())
    };

    match render() {
        Ok(response) => response,
        Err(error) => error.into_alert_response(),
    }
}

/// Render the sales statistics for a month.
pub async fn get_stats_fragment(
    State(state): State<DashboardState>,
    HxRequest(is_htmx): HxRequest,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Response {
    if !is_htmx {
        return redirect_to_dashboard(raw_query);
    }

    let render = || -> Result<Markup, Error> {
        let Query(query) = query.map_err(rejected_query)?;
        let month = query.month()?;
        let stats = month_stats(state.records()?, month);

        Ok(stats_view(month, &stats))
    };

    match render() {
        Ok(fragment) => fragment.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Render the price range and category charts for a month.
pub async fn get_price_range_fragment(
    State(state): State<DashboardState>,
    HxRequest(is_htmx): HxRequest,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Response {
    if !is_htmx {
        return redirect_to_dashboard(raw_query);
    }

    let render = || -> Result<Markup, Error> {
        let Query(query) = query.map_err(rejected_query)?;
        let month = query.month()?;
        let records = state.records()?;
        let charts = build_dashboard_charts(
            month,
            &bar_chart(records, month),
            &pie_chart(records, month),
        );

        Ok(charts_view(&charts))
    };

    match render() {
        Ok(fragment) => fragment.into_response(),
        Err(error) => error.into_alert_response(),
    }
}
