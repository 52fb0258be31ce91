//! Environmental impact per generation type, one tab per impact category.

use super::RegionDates;
use dioxus::prelude::*;
use lca_chart_ui::components::{
    ChartContainer, ChartHeader, DataExpander, ImpactCategoryTabs, LoadingSpinner, MessageDisplay,
};
use lca_chart_ui::js_bridge;
use lca_chart_ui::request::LatestRequest;
use lca_chart_ui::state::AppState;
use lca_core::api::ImpactQuery;
use lca_data::join::ImpactRow;
use lca_data::{render_page, PageConfig, PageOutcome};

const IMPACT_CHART_ID: &str = "impact-chart";
const IMPACT_TABLE_ID: &str = "impact-table";

#[component]
pub fn ImpactPage() -> Element {
    let state = use_context::<AppState>();
    let mut outcome = use_signal(|| None::<PageOutcome<ImpactRow>>);
    let mut fetching = use_signal(|| false);
    let latest = use_hook(LatestRequest::default);

    // Recalculate whenever the tab, region or start date changes
    use_effect(move || {
        let category_id = (state.impact_category)();
        let region_code = (state.selected_region)();
        let start = state.start();
        let reference = state.reference.read().clone();

        let (Some(category_id), Some(date_start), Some(reference)) = (category_id, start, reference)
        else {
            latest.cancel();
            outcome.set(None);
            fetching.set(false);
            return;
        };
        let Some(category) = reference.impact_category(category_id).cloned() else {
            latest.cancel();
            outcome.set(None);
            fetching.set(false);
            return;
        };
        let query = ImpactQuery {
            region_code,
            date_start,
            impact_category_id: category.id,
        };
        let api = state.api.peek().clone();
        js_bridge::destroy_chart(IMPACT_CHART_ID);
        let ticket = latest.begin();
        let latest = latest.clone();
        outcome.set(None);
        fetching.set(true);
        spawn(async move {
            let fetched = api.calculate(&query).await;
            // Only the reply to the latest tab, region and start date is shown
            if !latest.is_current(ticket) {
                return;
            }
            outcome.set(Some(render_page(&PageConfig::impact(&category), fetched, &reference)));
            fetching.set(false);
        });
    });

    use_effect(move || {
        if let Some(PageOutcome::Chart(view)) = outcome.read().as_ref() {
            js_bridge::render_bar_chart(IMPACT_CHART_ID, &view.points_json(), &view.config.to_json());
        }
    });

    let current = outcome.read().clone();

    rsx! {
        ChartHeader { title: "Environmental impact".to_string() }
        RegionDates {}
        ImpactCategoryTabs {}
        if fetching() {
            LoadingSpinner { label: "Calculating...".to_string() }
        } else {
            {match current {
                None => rsx! {},
                // A failed calculation stops the tab here
                Some(PageOutcome::Message(message)) => rsx! { MessageDisplay { message: message } },
                Some(PageOutcome::Chart(view)) => rsx! {
                    ChartHeader {
                        title: view.config.title.clone(),
                        caption: view.config.y_label.clone(),
                    }
                    if let Some(note) = view.omitted_note() {
                        p { style: "font-size: 11px; color: #888;", "{note}" }
                    }
                    ChartContainer { id: IMPACT_CHART_ID.to_string(), min_height: 400 }
                    DataExpander {
                        id: IMPACT_TABLE_ID.to_string(),
                        rows_json: view.table_json(),
                        label: "Show impact data".to_string(),
                    }
                },
            }}
        }
    }
}
