//! Defines the app level error type and its conversions to JSON responses, HTML alerts and pages.
use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{alert::Alert, html::error_view, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request did not include the `month` query parameter.
    #[error("the query parameter \"month\" is required")]
    MissingMonth,

    /// The `month` query parameter was not an integer between 1 and 12.
    ///
    /// Callers should pass in the raw parameter value.
    #[error("\"{0}\" is not a month number between 1 and 12")]
    InvalidMonth(String),

    /// The `page` query parameter was not an integer of 1 or greater.
    #[error("\"{0}\" is not a page number of 1 or greater")]
    InvalidPage(String),

    /// The query string could not be parsed, e.g. it repeats a parameter.
    #[error("{0}")]
    InvalidQuery(String),

    /// The record store could not provide its records.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("the record store is unavailable: {0}")]
    RecordStoreUnavailable(String),

    /// A record in a data file broke one of the record invariants.
    #[error("record #{index} is invalid: {reason}")]
    InvalidRecord {
        /// The zero-based position of the record in the data file.
        index: usize,
        /// The broken invariant.
        reason: String,
    },

    /// The data file extension is neither `.json` nor `.csv`.
    #[error("unsupported data file \"{0}\", expected a .json or .csv file")]
    UnsupportedDataFormat(String),

    /// The data file could not be read, written or parsed.
    #[error("could not use the data file: {0}")]
    DataFileError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<QueryRejection> for Error {
    fn from(value: QueryRejection) -> Self {
        Error::InvalidQuery(value.body_text())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::DataFileError(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::DataFileError(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::DataFileError(value.to_string())
    }
}

/// The JSON body sent to API clients when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    /// Whether the error was caused by the request rather than the server.
    fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MissingMonth
                | Error::InvalidMonth(_)
                | Error::InvalidPage(_)
                | Error::InvalidQuery(_)
        )
    }

    /// The HTTP status code that best describes the error.
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// The message that is safe to show to a client.
    ///
    /// Client errors explain what to fix, everything else is replaced with a
    /// general message and the details are logged.
    fn client_message(&self) -> String {
        if self.is_client_error() {
            return self.to_string();
        }

        tracing::error!("An unexpected error occurred: {self}");
        "An unexpected error occurred, check the server logs for more details.".to_owned()
    }

    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let status_code = self.status_code();
        let alert = match &self {
            Error::MissingMonth | Error::InvalidMonth(_) => {
                Alert::error("Invalid month", &self.to_string())
            }
            Error::InvalidPage(_) => Alert::error("Invalid page", &self.to_string()),
            Error::InvalidQuery(_) => Alert::error("Invalid query", &self.to_string()),
            error => Alert::error("Something went wrong", &error.client_message()),
        };

        (status_code, alert.into_html()).into_response()
    }

    /// Convert the error into a full HTML error page.
    pub fn into_page_response(self) -> Response {
        match &self {
            error if error.is_client_error() => (
                StatusCode::BAD_REQUEST,
                error_view(
                    "Bad Request",
                    "400",
                    &self.to_string(),
                    "Pick a month from the dashboard and try again.",
                ),
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = ErrorBody {
            error: self.client_message(),
        };

        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::Query,
        http::{StatusCode, Uri},
        response::IntoResponse,
    };
    use serde_json::Value;

    use crate::queries::MonthQuery;

    use super::Error;

    async fn json_body(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn invalid_month_is_a_bad_request() {
        let (status, body) = json_body(Error::InvalidMonth("13".to_owned())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "\"13\" is not a month number between 1 and 12");
    }

    #[tokio::test]
    async fn store_failure_hides_details() {
        let (status, body) =
            json_body(Error::RecordStoreUnavailable("disk on fire".to_owned())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(
            !message.contains("disk on fire"),
            "error details leaked to the client: {message}"
        );
    }

    #[test]
    fn alert_response_uses_error_status() {
        let response = Error::InvalidPage("0".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn query_rejection_is_a_bad_request() {
        let rejection =
            Query::<MonthQuery>::try_from_uri(&Uri::from_static("/?month=1&month=2")).unwrap_err();

        let (status, body) = json_body(Error::from(rejection)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("duplicate field"), "got {message}");
    }

    #[test]
    fn page_response_for_missing_month_is_bad_request() {
        let response = Error::MissingMonth.into_page_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
