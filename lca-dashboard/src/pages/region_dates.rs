//! Region selector plus date pickers bounded by the region's daily counts.

use dioxus::prelude::*;
use lca_chart_ui::components::{DateRangePicker, MessageDisplay, RegionSelector};
use lca_chart_ui::request::LatestRequest;
use lca_chart_ui::state::AppState;
use lca_data::calendar::picker_bounds;
use lca_data::PageMessage;

/// Re-fetches `/datapoints_count_by_day` whenever the selected region changes
/// and either shows the date pickers or the message explaining why not.
#[component]
pub fn RegionDates() -> Element {
    let mut state = use_context::<AppState>();
    let mut message = use_signal(|| None::<PageMessage>);
    let latest = use_hook(LatestRequest::default);

    use_effect(move || {
        let region = (state.selected_region)();
        if region.is_empty() {
            latest.cancel();
            return;
        }
        let ticket = latest.begin();
        let latest = latest.clone();
        let api = state.api.peek().clone();
        spawn(async move {
            let fetched = api.datapoints_count_by_day(&region).await;
            // A newer region was picked while this one was in flight
            if !latest.is_current(ticket) || *state.selected_region.peek() != region {
                return;
            }
            match picker_bounds(&region, fetched) {
                Ok(bounds) => {
                    message.set(None);
                    state.set_date_bounds(Some(bounds));
                }
                Err(m) => {
                    state.set_date_bounds(None);
                    message.set(Some(m));
                }
            }
        });
    });

    let region = (state.selected_region)();

    rsx! {
        RegionSelector {}
        if let Some(m) = message() {
            MessageDisplay { message: m }
        } else if state.date_bounds.read().is_some() {
            p {
                style: "font-size: 13px; color: #444; margin: 4px 0;",
                "Available data for the region {region} are listed below"
            }
            DateRangePicker {}
        }
    }
}
