//! Electricity generation mix for a region and period.

use super::RegionDates;
use dioxus::prelude::*;
use lca_chart_ui::components::{ChartContainer, ChartHeader, DataExpander, MessageDisplay};
use lca_chart_ui::js_bridge;
use lca_chart_ui::request::LatestRequest;
use lca_chart_ui::state::AppState;
use lca_core::api::GenerationQuery;
use lca_data::join::GenerationRow;
use lca_data::{render_page, ChartKind, PageConfig, PageMessage, PageOutcome};

const GENERATION_CHART_ID: &str = "generation-chart";
const GENERATION_TABLE_ID: &str = "generation-table";

#[component]
pub fn GenerationPage() -> Element {
    let state = use_context::<AppState>();
    let mut outcome = use_signal(|| None::<PageOutcome<GenerationRow>>);
    let mut fetching = use_signal(|| false);
    let latest = use_hook(LatestRequest::default);

    // A new region invalidates the shown period and any fetch in flight
    let on_region = latest.clone();
    use_effect(move || {
        let _ = (state.selected_region)();
        on_region.cancel();
        outcome.set(None);
        fetching.set(false);
    });

    let on_show = move |_| {
        let Some(reference) = state.reference.peek().clone() else {
            return;
        };
        let Some(date_start) = state.start() else {
            outcome.set(Some(PageOutcome::Message(PageMessage::NoData)));
            return;
        };
        let query = GenerationQuery {
            region_code: (state.selected_region)(),
            date_start,
            date_end: state.end(),
        };
        let api = state.api.peek().clone();
        js_bridge::destroy_chart(GENERATION_CHART_ID);
        let ticket = latest.begin();
        let latest = latest.clone();
        fetching.set(true);
        spawn(async move {
            let fetched = api.generation(&query).await;
            if !latest.is_current(ticket) {
                return;
            }
            let config = PageConfig::generation().with_chart(ChartKind::Line);
            outcome.set(Some(render_page(&config, fetched, &reference)));
            fetching.set(false);
        });
    };

    use_effect(move || {
        if let Some(PageOutcome::Chart(view)) = outcome.read().as_ref() {
            js_bridge::render_series_chart(
                GENERATION_CHART_ID,
                &view.points_json(),
                &view.config.to_json(),
            );
        }
    });

    let current = outcome.read().clone();
    let has_bounds = state.date_bounds.read().is_some();

    rsx! {
        ChartHeader { title: "Electricity generation".to_string() }
        RegionDates {}
        if has_bounds {
            button {
                style: "padding: 6px 12px; margin: 4px 0;",
                disabled: fetching(),
                onclick: on_show,
                "Show electricity generation for period"
            }
        }
        {match current {
            None => rsx! {},
            Some(PageOutcome::Message(message)) => rsx! { MessageDisplay { message: message } },
            Some(PageOutcome::Chart(view)) => rsx! {
                if let Some(note) = view.omitted_note() {
                    p { style: "font-size: 11px; color: #888;", "{note}" }
                }
                ChartContainer {
                    id: GENERATION_CHART_ID.to_string(),
                    loading: fetching(),
                    min_height: 420,
                }
                DataExpander {
                    id: GENERATION_TABLE_ID.to_string(),
                    rows_json: view.table_json(),
                    label: "Show generation data".to_string(),
                }
            },
        }}
    }
}
