//! One-line page message shown in place of a chart.

use dioxus::prelude::*;
use lca_data::PageMessage;

#[derive(Props, Clone, PartialEq)]
pub struct MessageDisplayProps {
    pub message: PageMessage,
}

/// Shows a [`PageMessage`]. Calculation errors are styled as errors and
/// preceded by the upstream response body when there is one.
#[component]
pub fn MessageDisplay(props: MessageDisplayProps) -> Element {
    let text = props.message.to_string();
    let is_error = matches!(
        props.message,
        PageMessage::CalculationError { .. } | PageMessage::AvailabilityUnknown
    );
    let detail = props.message.detail().map(|d| d.to_string());
    let style = if is_error {
        "padding: 8px 12px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px;"
    } else {
        "padding: 8px 12px; margin: 8px 0; background: #F5F5F5; color: #555; border-radius: 4px;"
    };

    rsx! {
        div {
            style: "{style}",
            if let Some(detail) = detail {
                pre {
                    style: "margin: 0 0 4px 0; font-size: 11px; white-space: pre-wrap;",
                    "{detail}"
                }
            }
            "{text}"
        }
    }
}
