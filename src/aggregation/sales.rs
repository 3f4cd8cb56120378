//! Sales totals for a set of records.

use serde::Serialize;

use crate::record::Record;

/// The sales totals shown in the dashboard's statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// The sum of the prices of the sold records, rounded to cents.
    pub total_sales: f64,
    /// The number of sold records.
    pub sold_items: usize,
    /// The number of records that have not been sold.
    pub not_sold_items: usize,
}

/// Calculate the sales totals for `records`.
pub fn summarize_sales<'a, I>(records: I) -> SalesSummary
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut summary = records
        .into_iter()
        .fold(SalesSummary::default(), |mut summary, record| {
            if record.sold {
                summary.total_sales += record.price;
                summary.sold_items += 1;
            } else {
                summary.not_sold_items += 1;
            }

            summary
        });

    summary.total_sales = (summary.total_sales * 100.0).round() / 100.0;
    summary
}
