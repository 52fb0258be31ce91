//! One tab per impact category.

use crate::state::AppState;
use dioxus::prelude::*;

const TAB_STYLE: &str = "padding: 6px 10px; border: none; background: none; color: #555; cursor: pointer;";
const ACTIVE_TAB_STYLE: &str = "padding: 6px 10px; border: none; border-bottom: 2px solid #1565C0; background: none; font-weight: bold; cursor: pointer;";

#[component]
pub fn ImpactCategoryTabs() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.impact_category)();
    let tabs: Vec<(i32, String, &'static str)> = state
        .reference
        .read()
        .as_ref()
        .map(|r| {
            r.impact_categories
                .iter()
                .map(|c| {
                    let style = if selected == Some(c.id) {
                        ACTIVE_TAB_STYLE
                    } else {
                        TAB_STYLE
                    };
                    (c.id, c.name.clone(), style)
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 4px; margin: 8px 0; border-bottom: 1px solid #e0e0e0;",
            for (id, name, style) in tabs.into_iter() {
                button {
                    key: "{id}",
                    style: "{style}",
                    onclick: move |_| state.impact_category.set(Some(id)),
                    "{name}"
                }
            }
        }
    }
}
