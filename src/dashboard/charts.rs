//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for a month of records:
//! - **Price Ranges**: a bar chart of the number of records in each price band
//! - **Categories**: a pie chart of the number of records in each category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a container and an inline initialization script, so charts
//! also render when the section is swapped in by HTMX.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisType, Tooltip, Trigger},
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};
use time::Month;

use crate::aggregation::{CategoryCount, LabelledBandCount};

/// The ECharts script served from a CDN.
pub(super) const ECHARTS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Build the price range and category charts for `month`.
pub(super) fn build_dashboard_charts(
    month: Month,
    bands: &[LabelledBandCount],
    categories: &[CategoryCount],
) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "price-range-chart",
            options: price_range_chart(month, bands).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(month, categories).to_string(),
        },
    ]
}

/// Renders the chart containers followed by the script that draws them.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
        {
            @for chart in charts {
                div
                    id=(chart.id)
                    class="min-h-[380px] rounded dark:bg-gray-100"
                {}
            }
        }

        script { (charts_script(charts)) }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
///
/// `<` only occurs inside JSON strings, so it is written as `\u003c` to keep
/// labels such as `</script>` from closing the script element.
fn charts_script(charts: &[DashboardChart]) -> PreEscaped<String> {
    let script_content = charts
        .iter()
        .map(|chart| {
            let options = chart.options.replace('<', "\\u003c");

            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    PreEscaped(script_content)
}

fn price_range_chart(month: Month, bands: &[LabelledBandCount]) -> Chart {
    let labels: Vec<String> = bands.iter().map(|band| band.range.clone()).collect();
    let values: Vec<f64> = bands.iter().map(|band| band.count as f64).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Price Ranges")
                .subtext(format!("Transactions in {month}")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Bar::new().name("Transactions").data(values))
}

fn category_chart(month: Month, categories: &[CategoryCount]) -> Chart {
    let data: Vec<(f64, &str)> = categories
        .iter()
        .map(|category| (category.count as f64, category.category.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Categories")
                .subtext(format!("Transactions in {month}")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("1%"))
        .series(
            Pie::new()
                .name("Transactions")
                .radius(vec!["40%", "65%"])
                .data(data),
        )
}
