//! Query string parameters shared by the JSON API and the dashboard.
//!
//! Parameters are deserialized as raw strings and parsed afterwards so that a
//! bad value produces one of the app's own errors instead of a plain text
//! rejection from axum.

use serde::Deserialize;
use time::Month;

use crate::Error;

/// Query parameters for requests that only select a month.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonthQuery {
    /// The 1-based month number.
    pub month: Option<String>,
}

impl MonthQuery {
    /// The selected month.
    ///
    /// # Errors
    /// Returns [Error::MissingMonth] or [Error::InvalidMonth].
    pub fn month(&self) -> Result<Month, Error> {
        parse_month(self.month.as_deref())
    }
}

/// Query parameters for the transaction listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListQuery {
    /// The 1-based month number.
    pub month: Option<String>,
    /// The 1-based page number.
    pub page: Option<String>,
    /// Text to search for in the month's transactions.
    pub search: Option<String>,
}

impl ListQuery {
    /// Parse the parameters, using `default_page` when no page is given.
    ///
    /// # Errors
    /// Returns [Error::MissingMonth], [Error::InvalidMonth] or [Error::InvalidPage].
    pub fn selection(&self, default_page: u64) -> Result<ListSelection, Error> {
        Ok(ListSelection {
            month: parse_month(self.month.as_deref())?,
            page: parse_page(self.page.as_deref(), default_page)?,
            search: self.search.as_deref().unwrap_or_default().trim().to_owned(),
        })
    }
}

/// A validated month, page and search term for the transaction listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSelection {
    pub month: Month,
    pub page: u64,
    /// The trimmed search term, empty for no search.
    pub search: String,
}

impl ListSelection {
    /// The same selection on another page.
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Encode the selection as a query string, e.g. "month=3&page=2&search=lamp".
    pub fn to_query_string(&self) -> String {
        let month = month_number(self.month).to_string();
        let page = self.page.to_string();
        let mut params = vec![("month", month.as_str()), ("page", page.as_str())];

        if !self.search.is_empty() {
            params.push(("search", self.search.as_str()));
        }

        serde_urlencoded::to_string(&params).unwrap_or_else(|error| {
            tracing::error!("Could not encode search term {:?}: {error}", self.search);
            format!("month={month}&page={page}")
        })
    }

    /// The URL for `route` with this selection as the query string.
    pub fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }
}

/// The 1-based number of `month`, e.g. 3 for March.
pub fn month_number(month: Month) -> u8 {
    month as u8
}

/// Parse a 1-based month number.
///
/// Surrounding whitespace is ignored and an empty value counts as missing.
///
/// # Errors
/// Returns [Error::MissingMonth] if `raw` is `None` or blank, or
/// [Error::InvalidMonth] if it is not an integer from 1 to 12.
pub fn parse_month(raw: Option<&str>) -> Result<Month, Error> {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw.is_empty() {
        return Err(Error::MissingMonth);
    }

    raw.parse::<u8>()
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .ok_or_else(|| Error::InvalidMonth(raw.to_owned()))
}

/// Parse a 1-based page number, using `default_page` when `raw` is `None` or blank.
///
/// # Errors
/// Returns [Error::InvalidPage] if `raw` is not an integer of 1 or greater.
pub fn parse_page(raw: Option<&str>, default_page: u64) -> Result<u64, Error> {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw.is_empty() {
        return Ok(default_page);
    }

    raw.parse::<u64>()
        .ok()
        .filter(|&page| page >= 1)
        .ok_or_else(|| Error::InvalidPage(raw.to_owned()))
}
