//! Dropdown selector for choosing a region.

use crate::state::AppState;
use dioxus::prelude::*;

/// Region dropdown.
/// Lists the region codes of the reference tables and updates selected_region on change.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let regions = state
        .reference
        .read()
        .as_ref()
        .map(|r| r.regions.clone())
        .unwrap_or_default();
    let selected = (state.selected_region)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_region.set(evt.value());
        state.set_date_bounds(None);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Region: "
            }
            select {
                id: "region-select",
                onchange: on_change,
                for region in regions.iter() {
                    option {
                        value: "{region.code}",
                        selected: region.code == selected,
                        if region.name.is_empty() {
                            "{region.code}"
                        } else {
                            "{region.code} - {region.name}"
                        }
                    }
                }
            }
        }
    }
}
