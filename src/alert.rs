//! Alert messages for reporting failed dashboard updates to users.
//!
//! Alerts are swapped into the `#alert-container` element of the base page
//! template by HTMX when a fragment request fails.

use maud::{Markup, html};

/// An error alert with a short summary and longer details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div
                role="alert"
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                    dark:bg-gray-800 dark:text-red-400"
            {
                span class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    " " (self.details)
                }

                button
                    type="button"
                    class="ms-2 font-semibold underline"
                    onclick="this.parentElement.remove()"
                {
                    "Dismiss"
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_contains_message_and_details() {
        let alert = Alert::error(
            "Invalid month",
            "\"13\" is not a month number between 1 and 12",
        );

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let selector = Selector::parse("div[role='alert']").unwrap();
        let element = html.select(&selector).next().expect("alert div missing");
        let text = element.text().collect::<String>();
        assert!(text.contains("Invalid month"), "got text {text}");
        assert!(text.contains("not a month number"), "got text {text}");
    }
}
