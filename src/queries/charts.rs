//! The per-month statistics and chart queries.
//!
//! Each query filters the records to one month and then runs one or more of
//! the aggregations over the filtered set.

use serde::Serialize;
use time::Month;

use crate::{
    aggregation::{
        BoundedBandCount, CategoryCount, LabelledBandCount, SalesSummary, bucket_by_price,
        filter_by_month, group_by_category, summarize_sales,
    },
    record::Record,
};

/// The price band counts with numeric bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRanges {
    /// One entry per price band in ascending order.
    pub ranges: Vec<BoundedBandCount>,
}

/// The bar chart and pie chart data for the same month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedChart {
    pub bar_chart: Vec<LabelledBandCount>,
    pub pie_chart: Vec<CategoryCount>,
}

/// The sales totals for `month`.
pub fn month_stats(records: &[Record], month: Month) -> SalesSummary {
    summarize_sales(filter_by_month(records, month))
}

/// The number of records in each price band for `month`.
pub fn price_ranges(records: &[Record], month: Month) -> PriceRanges {
    PriceRanges {
        ranges: bucket_by_price(filter_by_month(records, month))
            .into_iter()
            .map(BoundedBandCount::from)
            .collect(),
    }
}

/// The labelled price band counts for `month`.
pub fn bar_chart(records: &[Record], month: Month) -> Vec<LabelledBandCount> {
    labelled_bands(&filter_by_month(records, month))
}

/// The number of records per category for `month`, in order of first occurrence.
pub fn pie_chart(records: &[Record], month: Month) -> Vec<CategoryCount> {
    group_by_category(filter_by_month(records, month))
}

/// The bar chart and pie chart data for `month`, computed from one filtered set.
pub fn combined_chart(records: &[Record], month: Month) -> CombinedChart {
    let month_records = filter_by_month(records, month);

    CombinedChart {
        bar_chart: labelled_bands(&month_records),
        pie_chart: group_by_category(month_records.iter().copied()),
    }
}

fn labelled_bands(records: &[&Record]) -> Vec<LabelledBandCount> {
    bucket_by_price(records.iter().copied())
        .into_iter()
        .map(LabelledBandCount::from)
        .collect()
}
