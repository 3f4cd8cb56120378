//! The searchable, paged transaction listing.

use serde::Serialize;

use crate::{
    aggregation::{SalesSummary, filter_by_month, summarize_sales},
    pagination::{page_count, page_slice},
    record::Record,
};

use super::ListSelection;

/// One page of a month's transactions with the totals for every matching transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    /// The transactions on the requested page.
    pub transactions: Vec<Record>,
    /// The 1-based page number.
    pub page: u64,
    /// The maximum number of transactions per page.
    pub per_page: u64,
    /// The number of transactions matching the month and search term.
    pub total_count: usize,
    /// The number of pages, at least one.
    pub page_count: u64,
    /// Totals over every matching transaction, not just this page.
    #[serde(flatten)]
    pub summary: SalesSummary,
}

/// Whether `record` matches the search term.
///
/// An empty term matches everything. Otherwise the term must appear in the
/// title, description or category, ignoring case, or be a prefix of the price
/// as written without trailing zeros, e.g. "15" matches a price of 150.
pub fn matches_search(record: &Record, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let search = search.to_lowercase();

    [&record.title, &record.description, &record.category]
        .iter()
        .any(|text| text.to_lowercase().contains(&search))
        || record.price.to_string().starts_with(&search)
}

/// Get the requested page of transactions for the selected month and search term.
pub fn list_transactions(
    records: &[Record],
    selection: &ListSelection,
    page_size: u64,
) -> TransactionPage {
    let matching: Vec<&Record> = filter_by_month(records, selection.month)
        .into_iter()
        .filter(|record| matches_search(record, &selection.search))
        .collect();

    let summary = summarize_sales(matching.iter().copied());
    let transactions = page_slice(&matching, selection.page, page_size)
        .iter()
        .map(|&record| record.clone())
        .collect();

    TransactionPage {
        transactions,
        page: selection.page,
        per_page: page_size,
        total_count: matching.len(),
        page_count: page_count(matching.len(), page_size),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{
        queries::ListSelection,
        record::{Record, sample_records},
    };

    use super::{list_transactions, matches_search};

    fn selection(month: Month, page: u64, search: &str) -> ListSelection {
        ListSelection {
            month,
            page,
            search: search.to_owned(),
        }
    }

    fn lamp() -> Record {
        Record::build(150.0, "Home", date!(2024 - 01 - 05))
            .title("Desk Lamp")
            .description("Brass reading lamp")
            .finalize(1)
    }

    #[test]
    fn search_ignores_case() {
        let record = lamp();

        assert!(matches_search(&record, "desk"));
        assert!(matches_search(&record, "BRASS"));
        assert!(matches_search(&record, "home"));
        assert!(!matches_search(&record, "chair"));
    }

    #[test]
    fn search_matches_price_prefix() {
        let record = lamp();

        assert!(matches_search(&record, "15"));
        assert!(matches_search(&record, "150"));
        assert!(!matches_search(&record, "50"));
        assert!(!matches_search(&record, "150.0"));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(matches_search(&lamp(), ""));
    }

    #[test]
    fn lists_only_the_selected_month() {
        let records = vec![
            Record::build(50.0, "A", date!(2024 - 01 - 10)).finalize(1),
            Record::build(150.0, "B", date!(2024 - 01 - 20)).sold(true).finalize(2),
            Record::build(250.0, "A", date!(2024 - 02 - 10)).finalize(3),
        ];

        let got = list_transactions(&records, &selection(Month::January, 1, ""), 10);

        let ids: Vec<u64> = got.transactions.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(got.total_count, 2);
        assert_eq!(got.page_count, 1);
        assert_eq!(got.summary.total_sales, 150.0);
        assert_eq!(got.summary.sold_items, 1);
        assert_eq!(got.summary.not_sold_items, 1);
    }

    #[test]
    fn totals_cover_every_page() {
        let records: Vec<Record> = (1..=25)
            .map(|id| {
                Record::build(10.0, "A", date!(2024 - 05 - 01))
                    .sold(true)
                    .finalize(id)
            })
            .collect();

        let got = list_transactions(&records, &selection(Month::May, 3, ""), 10);

        assert_eq!(got.transactions.len(), 5);
        assert_eq!(got.transactions[0].id, 21);
        assert_eq!(got.total_count, 25);
        assert_eq!(got.page_count, 3);
        assert_eq!(got.summary.sold_items, 25);
        assert_eq!(got.summary.total_sales, 250.0);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let records = sample_records();

        let got = list_transactions(&records, &selection(Month::January, 99, ""), 10);

        assert!(got.transactions.is_empty());
        assert_eq!(got.page, 99);
        assert!(got.total_count > 0);
    }

    #[test]
    fn search_narrows_totals() {
        let records = vec![
            lamp(),
            Record::build(80.0, "Office", date!(2024 - 01 - 07))
                .title("Chair")
                .finalize(2),
        ];

        let got = list_transactions(&records, &selection(Month::January, 1, "lamp"), 10);

        assert_eq!(got.total_count, 1);
        assert_eq!(got.transactions, vec![lamp()]);
        assert_eq!(got.summary.not_sold_items, 1);
    }

    #[test]
    fn serializes_flat_totals() {
        let records = sample_records();

        let got = list_transactions(&records, &selection(Month::March, 1, ""), 10);
        let json = serde_json::to_value(&got).unwrap();

        for key in [
            "transactions",
            "page",
            "perPage",
            "totalCount",
            "pageCount",
            "totalSales",
            "soldItems",
            "notSoldItems",
        ] {
            assert!(json.get(key).is_some(), "missing key {key} in {json}");
        }
    }
}
