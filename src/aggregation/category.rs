//! Counting records per category.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::Record;

/// The number of records with a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The category label.
    pub category: String,
    /// The number of records with the label.
    pub count: usize,
}

/// Count the records in each category found in `records`.
///
/// Categories are listed in the order they first appear in `records`, and
/// only categories with at least one record are listed.
pub fn group_by_category<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CategoryCount> = Vec::new();

    for record in records {
        match positions.get(record.category.as_str()) {
            Some(&position) => groups[position].count += 1,
            None => {
                positions.insert(&record.category, groups.len());
                groups.push(CategoryCount {
                    category: record.category.clone(),
                    count: 1,
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{
        aggregation::filter_by_month,
        record::{Record, sample_records},
    };

    use super::{CategoryCount, group_by_category};

    fn record_in_category(category: &str) -> Record {
        Record::build(10.0, category, date!(2024 - 01 - 01)).finalize(1)
    }

    fn category_count(category: &str, count: usize) -> CategoryCount {
        CategoryCount {
            category: category.to_owned(),
            count,
        }
    }

    #[test]
    fn counts_occurrences_in_first_seen_order() {
        let records: Vec<Record> = ["B", "A", "B", "C", "A", "B"]
            .into_iter()
            .map(record_in_category)
            .collect();

        let got = group_by_category(&records);

        assert_eq!(
            got,
            vec![
                category_count("B", 3),
                category_count("A", 2),
                category_count("C", 1),
            ]
        );
    }

    #[test]
    fn labels_are_case_sensitive() {
        let records: Vec<Record> = ["a", "A"].into_iter().map(record_in_category).collect();

        let got = group_by_category(&records);

        assert_eq!(got, vec![category_count("a", 1), category_count("A", 1)]);
    }

    #[test]
    fn returns_empty_for_empty_input() {
        let records: Vec<Record> = Vec::new();

        assert!(group_by_category(&records).is_empty());
    }

    #[test]
    fn group_counts_sum_to_month_size() {
        let records = sample_records();

        for month_number in 1..=12 {
            let month = Month::try_from(month_number).unwrap();
            let filtered = filter_by_month(&records, month);

            let groups = group_by_category(filtered.iter().copied());
            let total: usize = groups.iter().map(|group| group.count).sum();

            assert_eq!(total, filtered.len(), "group counts do not sum for {month}");
            assert!(groups.iter().all(|group| group.count >= 1));
        }
    }
}
