//! A dashboard for browsing a month of transactions.
//!
//! The server renders a dashboard page with a paged, searchable transaction
//! table, the month's sales statistics and charts of the transactions by price
//! range and category. The same data is available as JSON from the `/api`
//! routes. All results are computed on request from a read-only record store.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod alert;
mod api;
mod app_state;
mod dashboard;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod pagination;
mod queries;
mod record;
mod routing;
#[cfg(test)]
mod test_utils;
mod timezone;

pub use aggregation::{
    BandCount, BoundedBandCount, CategoryCount, LabelledBandCount, PRICE_BAND_COUNT, PriceBand,
    SalesSummary, bucket_by_price, filter_by_month, group_by_category, summarize_sales,
};
pub use app_state::AppState;
pub use error::Error;
pub use logging::logging_middleware;
pub use pagination::PaginationConfig;
pub use record::{
    InMemoryRecordStore, Record, RecordBuilder, RecordId, RecordStore, load_records,
    sample_records, write_records,
};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
