//! Application router configuration for the dashboard pages and the JSON API.

use axum::{Router, middleware, response::Redirect, routing::get};

use crate::{
    AppState,
    api::{
        get_bar_chart, get_combined_chart, get_pie_chart, get_price_range, get_transaction_stats,
        get_transactions,
    },
    dashboard::{
        get_dashboard_page, get_price_range_fragment, get_stats_fragment,
        get_transactions_fragment,
    },
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::DASHBOARD_TRANSACTIONS,
            get(get_transactions_fragment),
        )
        .route(endpoints::DASHBOARD_STATS, get(get_stats_fragment))
        .route(
            endpoints::DASHBOARD_PRICE_RANGE,
            get(get_price_range_fragment),
        );

    let api_routes = Router::new()
        .route(endpoints::TRANSACTIONS_API, get(get_transactions))
        .route(endpoints::TRANSACTION_STATS_API, get(get_transaction_stats))
        .route(endpoints::PRICE_RANGE_API, get(get_price_range))
        .route(endpoints::BAR_CHART_API, get(get_bar_chart))
        .route(endpoints::PIE_CHART_API, get(get_pie_chart))
        .route(endpoints::COMBINED_CHART_API, get(get_combined_chart));

    dashboard_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
