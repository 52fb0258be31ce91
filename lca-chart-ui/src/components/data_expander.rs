//! Collapsible detail view holding the full joined table.

use crate::js_bridge;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DataExpanderProps {
    /// DOM id the table renders into
    pub id: String,
    /// Row objects as a JSON array
    pub rows_json: String,
    #[props(default = "Show data".to_string())]
    pub label: String,
}

/// A `<details>` element whose table is drawn when it is toggled, so it
/// always shows the rows of the latest render.
#[component]
pub fn DataExpander(props: DataExpanderProps) -> Element {
    let id = props.id.clone();
    let rows_json = props.rows_json.clone();

    let on_toggle = move |_| {
        js_bridge::render_data_table(&id, &rows_json, "{}");
    };

    rsx! {
        details {
            style: "margin: 8px 0;",
            ontoggle: on_toggle,
            summary {
                style: "cursor: pointer; font-size: 13px; color: #1565C0;",
                "{props.label}"
            }
            div {
                id: "{props.id}",
                style: "max-height: 360px; overflow: auto;",
            }
        }
    }
}
