//! HTML views for the dashboard page and its HTMX fragments.
//!
//! The page has three sections that each reload their own fragment when the
//! filters change, so a slow or failed section never blocks the others.

use maud::{Markup, html};
use time::Month;

use crate::{
    aggregation::SalesSummary,
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, loading_spinner,
    },
    pagination::PageNavigation,
    queries::{ListSelection, TransactionPage, month_number},
};

use super::charts::{DashboardChart, ECHARTS_SCRIPT, charts_view};

/// The HTMX trigger for sections that only depend on the month.
const MONTH_TRIGGER: &str = "change from:#month";
/// The HTMX trigger for the transaction table.
const LISTING_TRIGGER: &str = "change from:#month, input changed delay:300ms from:#search";

/// Renders the full dashboard page with every section filled in.
pub(super) fn dashboard_view(
    selection: &ListSelection,
    listing: &TransactionPage,
    stats: &SalesSummary,
    charts: &[DashboardChart],
) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                h1 class="text-2xl font-bold mb-4" { "Transaction Dashboard" }

                (filters_view(selection))

                section
                    id="stats-section"
                    class="w-full mb-4"
                    hx-get=(endpoints::DASHBOARD_STATS)
                    hx-include="#month"
                    hx-trigger=(MONTH_TRIGGER)
                    hx-target-error="#alert-container"
                {
                    (stats_view(selection.month, stats))
                }

                section
                    id="transactions-section"
                    class="w-full mb-4"
                    hx-get=(endpoints::DASHBOARD_TRANSACTIONS)
                    hx-include="#dashboard-filters"
                    hx-trigger=(LISTING_TRIGGER)
                    hx-target-error="#alert-container"
                {
                    (transactions_view(selection, listing))
                }

                section
                    id="price-range-section"
                    class="w-full mb-4"
                    hx-get=(endpoints::DASHBOARD_PRICE_RANGE)
                    hx-include="#month"
                    hx-trigger=(MONTH_TRIGGER)
                    hx-target-error="#alert-container"
                {
                    (charts_view(charts))
                }
            }
        }
    );

    base(
        "Dashboard",
        &[HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())],
        &content,
    )
}

/// The month and search controls.
///
/// Submitting the form reloads the whole page, which keeps the dashboard
/// usable without JavaScript.
fn filters_view(selection: &ListSelection) -> Markup {
    html!(
        form
            id="dashboard-filters"
            action=(endpoints::DASHBOARD_VIEW)
            method="get"
            class="flex flex-col sm:flex-row gap-4 items-end mb-6"
        {
            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month" }

                select id="month" name="month" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for month in all_months() {
                        option
                            value=(month_number(month))
                            selected[month == selection.month]
                        {
                            (month)
                        }
                    }
                }
            }

            div class="grow"
            {
                label for="search" class=(FORM_LABEL_STYLE) { "Search" }

                input
                    id="search"
                    name="search"
                    type="search"
                    placeholder="Title, description, category or price"
                    value=(selection.search)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Apply" }
        }
    )
}

fn all_months() -> impl Iterator<Item = Month> {
    (1..=12u8).filter_map(|number| Month::try_from(number).ok())
}

/// The sales totals for the month.
pub(super) fn stats_view(month: Month, stats: &SalesSummary) -> Markup {
    let cards = [
        ("Total sales", format_currency(stats.total_sales)),
        ("Sold items", stats.sold_items.to_string()),
        ("Not sold items", stats.not_sold_items.to_string()),
    ];

    html!(
        h2 class="text-xl font-semibold mb-2"
        {
            "Statistics for " (month)
            (loading_spinner())
        }

        div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            @for (label, value) in cards {
                div class="p-4 rounded-lg bg-white dark:bg-gray-800 shadow"
                {
                    p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                    p class="text-2xl font-bold" data-stat=(label) { (value) }
                }
            }
        }
    )
}

/// A page of the transaction table with previous and next page buttons.
pub(super) fn transactions_view(selection: &ListSelection, listing: &TransactionPage) -> Markup {
    let navigation = PageNavigation::new(listing.page, listing.page_count);

    html!(
        h2 class="text-xl font-semibold mb-2"
        {
            "Transactions"
            (loading_spinner())
        }

        div class="relative overflow-x-auto shadow-md rounded-lg"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Sold" }
                    }
                }

                tbody
                {
                    @for record in &listing.transactions {
                        tr class=(TABLE_ROW_STYLE) data-record-id=(record.id)
                        {
                            td class=(TABLE_CELL_STYLE) { (record.date) }
                            td class=(TABLE_CELL_STYLE) { (record.title) }
                            td class=(TABLE_CELL_STYLE) { (record.description) }
                            td class=(TABLE_CELL_STYLE) { (record.category) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(record.price)) }
                            td class=(TABLE_CELL_STYLE) { @if record.sold { "Yes" } @else { "No" } }
                        }
                    }

                    @if listing.transactions.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="6" class=(TABLE_CELL_STYLE) { "No transactions found." }
                        }
                    }
                }
            }
        }

        nav class="flex items-center justify-between mt-4" aria-label="Table navigation"
        {
            (page_button("Previous", selection, navigation.back))

            span class="text-sm text-gray-700 dark:text-gray-400"
            {
                "Page " (navigation.curr_page) " of " (navigation.page_count)
                " (" (listing.total_count) " transactions)"
            }

            (page_button("Next", selection, navigation.next))
        }
    )
}

fn page_button(label: &str, selection: &ListSelection, page: Option<u64>) -> Markup {
    match page {
        Some(page) => html!(
            button
                type="button"
                class=(BUTTON_SECONDARY_STYLE)
                hx-get=(selection.with_page(page).to_url(endpoints::DASHBOARD_TRANSACTIONS))
                hx-target="#transactions-section"
                hx-target-error="#alert-container"
            {
                (label)
            }
        ),
        None => html!(
            button type="button" class=(BUTTON_SECONDARY_STYLE) disabled { (label) }
        ),
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::{Month, macros::date};

    use crate::{
        aggregation::SalesSummary,
        queries::{ListSelection, TransactionPage},
        record::Record,
    };

    use super::{stats_view, transactions_view};

    fn selection(page: u64) -> ListSelection {
        ListSelection {
            month: Month::January,
            page,
            search: "mug".to_owned(),
        }
    }

    fn listing(page: u64, page_count: u64, transactions: Vec<Record>) -> TransactionPage {
        TransactionPage {
            total_count: transactions.len(),
            transactions,
            page,
            per_page: 10,
            page_count,
            summary: SalesSummary::default(),
        }
    }

    #[test]
    fn first_page_disables_previous() {
        let records = vec![Record::build(12.5, "A", date!(2024 - 01 - 03)).title("Mug").finalize(1)];

        let html = Html::parse_fragment(
            &transactions_view(&selection(1), &listing(1, 2, records)).into_string(),
        );

        let buttons: Vec<_> = html.select(&Selector::parse("nav button").unwrap()).collect();
        assert_eq!(buttons.len(), 2);
        assert!(buttons[0].value().attr("disabled").is_some());
        assert_eq!(
            buttons[1].value().attr("hx-get"),
            Some("/dashboard/transactions?month=1&page=2&search=mug")
        );
    }

    #[test]
    fn empty_page_shows_placeholder_row() {
        let html = Html::parse_fragment(
            &transactions_view(&selection(3), &listing(3, 1, Vec::new())).into_string(),
        );

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No transactions found."), "got {text}");
    }

    #[test]
    fn stats_show_currency() {
        let stats = SalesSummary {
            total_sales: 1250.5,
            sold_items: 3,
            not_sold_items: 4,
        };

        let html = Html::parse_fragment(&stats_view(Month::March, &stats).into_string());

        let selector = Selector::parse("[data-stat='Sold items']").unwrap();
        let sold = html.select(&selector).next().expect("missing sold items");
        assert_eq!(sold.text().collect::<String>(), "3");
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("March"), "got {text}");
    }
}
