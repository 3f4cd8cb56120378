//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of records to display per page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
        }
    }
}

/// The number of pages needed to show `item_count` items, at least one.
pub fn page_count(item_count: usize, page_size: u64) -> u64 {
    let page_size = page_size.max(1);

    (item_count as u64).div_ceil(page_size).max(1)
}

/// Get the items on the 1-based `page`.
///
/// Pages past the end are empty rather than an error.
pub fn page_slice<T>(items: &[T], page: u64, page_size: u64) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let start = usize::try_from(start).unwrap_or(usize::MAX).min(items.len());
    let end = start
        .saturating_add(usize::try_from(page_size).unwrap_or(usize::MAX))
        .min(items.len());

    &items[start..end]
}

/// The previous and next page links for a page.
#[derive(Debug, PartialEq, Eq)]
pub struct PageNavigation {
    pub curr_page: u64,
    pub page_count: u64,
    /// The previous page, `None` on the first page.
    pub back: Option<u64>,
    /// The next page, `None` on or past the last page.
    pub next: Option<u64>,
}

impl PageNavigation {
    pub fn new(curr_page: u64, page_count: u64) -> Self {
        Self {
            curr_page,
            page_count,
            back: (curr_page > 1).then(|| curr_page - 1),
            next: (curr_page < page_count).then(|| curr_page + 1),
        }
    }
}
