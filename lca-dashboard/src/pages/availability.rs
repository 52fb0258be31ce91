//! Data availability: data points per region and a per-region calendar.

use dioxus::prelude::*;
use lca_chart_ui::components::{
    ChartContainer, ChartHeader, DataExpander, LoadingSpinner, MessageDisplay, RegionSelector,
};
use lca_chart_ui::js_bridge;
use lca_chart_ui::request::LatestRequest;
use lca_chart_ui::state::AppState;
use lca_core::date_range::DateRange;
use lca_data::availability::{render_availability, AvailabilitySummary};
use lca_data::calendar::{render_calendar, CalendarView};
use lca_data::PageMessage;

const AVAILABILITY_CHART_ID: &str = "availability-chart";
const AVAILABILITY_TABLE_ID: &str = "availability-table";
const CALENDAR_CHART_ID: &str = "calendar-heatmap";
const CALENDAR_TABLE_ID: &str = "calendar-table";

#[component]
pub fn AvailabilityPage() -> Element {
    let mut state = use_context::<AppState>();
    let mut summary = use_signal(|| None::<Result<AvailabilitySummary, PageMessage>>);

    // Fetch availability once when the page mounts
    use_effect(move || {
        let api = state.api.peek().clone();
        spawn(async move {
            let rendered = render_availability(api.available_data_region().await);
            if let Ok(s) = &rendered {
                if let (Some(earliest), Some(latest)) = (s.earliest, s.latest) {
                    state
                        .availability_span
                        .set(Some(DateRange(earliest.date(), latest.date())));
                }
            }
            summary.set(Some(rendered));
        });
    });

    // Draw the bar chart once the summary arrives
    use_effect(move || {
        if let Some(Ok(s)) = summary.read().as_ref() {
            let view = s.chart_view();
            js_bridge::render_bar_chart(
                AVAILABILITY_CHART_ID,
                &view.points_json(),
                &view.config.to_json(),
            );
        }
    });

    let current = summary.read().clone();
    rsx! {
        {match current {
            None => rsx! { LoadingSpinner { label: "Loading data availability...".to_string() } },
            // Without availability the rest of the page is skipped
            Some(Err(message)) => rsx! { MessageDisplay { message: message } },
            Some(Ok(s)) => rsx! {
                ChartHeader {
                    title: "Data availability".to_string(),
                    caption: s.span_text().unwrap_or_default(),
                }
                ChartContainer { id: AVAILABILITY_CHART_ID.to_string(), min_height: 400 }
                DataExpander {
                    id: AVAILABILITY_TABLE_ID.to_string(),
                    rows_json: s.records_json(),
                    label: "Show availability table".to_string(),
                }
                RegionCalendar {}
            },
        }}
    }
}

/// Calendar of daily data points for the selected region, fetched on demand.
#[component]
fn RegionCalendar() -> Element {
    let state = use_context::<AppState>();
    let mut calendar = use_signal(|| None::<Result<CalendarView, PageMessage>>);
    let mut fetching = use_signal(|| false);
    let latest = use_hook(LatestRequest::default);

    let on_show = move |_| {
        let region = (state.selected_region)();
        let span = (state.availability_span)();
        let api = state.api.peek().clone();
        let ticket = latest.begin();
        let latest = latest.clone();
        fetching.set(true);
        spawn(async move {
            let fetched = api.datapoints_count_by_day(&region).await;
            if !latest.is_current(ticket) {
                return;
            }
            calendar.set(Some(render_calendar(&region, fetched, span)));
            fetching.set(false);
        });
    };

    use_effect(move || {
        if let Some(Ok(view)) = calendar.read().as_ref() {
            let config = serde_json::json!({
                "regionCode": view.region_code,
                "maxCount": view.max_count,
            })
            .to_string();
            js_bridge::render_calendar_heatmap(CALENDAR_CHART_ID, &view.cells_json(), &config);
        }
    });

    let current = calendar.read().clone();
    rsx! {
        div {
            style: "margin-top: 16px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            ChartHeader { title: "Data points per day".to_string() }
            RegionSelector {}
            button {
                style: "padding: 6px 12px; margin: 4px 0;",
                disabled: fetching(),
                onclick: on_show,
                "Show calendar"
            }
            {match current {
                None => rsx! {},
                Some(Err(message)) => rsx! { MessageDisplay { message: message } },
                Some(Ok(view)) => rsx! {
                    p {
                        style: "font-size: 12px; color: #666; margin: 4px 0;",
                        "Region {view.region_code}: up to {view.max_count} data points per day"
                    }
                    ChartContainer {
                        id: CALENDAR_CHART_ID.to_string(),
                        loading: fetching(),
                        min_height: 140,
                    }
                    DataExpander {
                        id: CALENDAR_TABLE_ID.to_string(),
                        rows_json: view.counts_json(),
                        label: "Show daily counts".to_string(),
                    }
                },
            }}
        }
    }
}
