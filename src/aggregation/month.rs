//! Selecting the records that fall in a calendar month.

use time::Month;

use crate::record::Record;

/// Get the records dated in `month` of any year, in their original order.
///
/// Record dates are plain calendar dates, so no timezone conversion is
/// applied. Returns an empty vector when no records match.
pub fn filter_by_month<'a, I>(records: I, month: Month) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| record.date.month() == month)
        .collect()
}
