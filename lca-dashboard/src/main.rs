//! Electricity LCA dashboard
//!
//! Data flow:
//! 1. `build.rs` copies the reference-table snapshots from
//!    `fixtures/reference/` into `OUT_DIR` and bakes in `ELEC_LCA_API_URL`.
//! 2. `include_str!` embeds the snapshots into the WASM binary.
//! 3. On mount: load the snapshots into an in-memory SQLite database and run
//!    the four reference queries. A failure here stops the session.
//! 4. Each page fetches from the backend API and renders through the shared
//!    join-and-render pipeline in `lca-data`.

mod pages;

use dioxus::prelude::*;
use lca_chart_ui::components::{ErrorDisplay, LoadingSpinner};
use lca_chart_ui::js_bridge;
use lca_chart_ui::state::AppState;
use lca_core::reference::ReferenceDataset;
use lca_db::Database;
use pages::{AvailabilityPage, GenerationPage, ImpactPage};

const GENERATION_TYPES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/generation_types.csv"));
const GENERATION_TYPE_MAPPINGS_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/generation_type_mappings.csv"));
const REGIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/regions.csv"));
const IMPACT_CATEGORIES_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/impact_categories.csv"));

const API_URL: &str = env!("ELEC_LCA_API_URL");

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Availability,
    Generation,
    Impact,
}

impl Page {
    const ALL: [Page; 3] = [Page::Availability, Page::Generation, Page::Impact];

    fn label(self) -> &'static str {
        match self {
            Page::Availability => "Data availability",
            Page::Generation => "Electricity generation",
            Page::Impact => "Environmental impact",
        }
    }
}

fn nav_style(active: bool) -> &'static str {
    if active {
        "font-weight: bold; padding: 6px 12px;"
    } else {
        "padding: 6px 12px;"
    }
}

fn connection_caption(api_url: &str) -> String {
    format!("Connected to : {}", api_url)
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting LCA dashboard against {}", API_URL);
    dioxus::launch(App);
}

/// Load the embedded snapshots and run the reference queries.
fn load_reference() -> anyhow::Result<ReferenceDataset> {
    let db = Database::new()?;
    db.load_generation_types(GENERATION_TYPES_CSV)?;
    db.load_generation_type_mappings(GENERATION_TYPE_MAPPINGS_CSV)?;
    db.load_regions(REGIONS_CSV)?;
    db.load_impact_categories(IMPACT_CATEGORIES_CSV)?;
    db.load_reference_data()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(API_URL));
    let mut page = use_signal(|| Page::Availability);

    // Load the reference tables once per session
    use_effect(move || {
        match load_reference() {
            Ok(reference) => {
                log::info!(
                    "reference data loaded at {}: {} regions, {} generation types",
                    reference.retrieved_at,
                    reference.regions.len(),
                    reference.generation_types.len()
                );
                state.set_reference(reference);
            }
            Err(e) => {
                log::error!("failed to load reference data: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load reference data: {}", e)));
                state.loading.set(false);
            }
        }
        js_bridge::init_charts();
    });

    let current = page();
    let caption = connection_caption(API_URL);

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 22px; margin: 8px 0;",
                "Electricity LCA"
            }
            p {
                style: "font-size: 12px; color: #666; margin: 0 0 8px 0;",
                "{caption}"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner { label: "Loading reference data...".to_string() }
            } else {
                nav {
                    style: "display: flex; gap: 8px; margin-bottom: 12px;",
                    for p in Page::ALL {
                        button {
                            key: "{p.label()}",
                            style: "{nav_style(p == current)}",
                            onclick: move |_| page.set(p),
                            "{p.label()}"
                        }
                    }
                }

                {match current {
                    Page::Availability => rsx! { AvailabilityPage {} },
                    Page::Generation => rsx! { GenerationPage {} },
                    Page::Impact => rsx! { ImpactPage {} },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_names_backend_url() {
        assert_eq!(
            connection_caption("http://localhost:8000"),
            "Connected to : http://localhost:8000"
        );
    }

    #[test]
    fn only_active_page_is_bold() {
        assert!(nav_style(true).contains("bold"));
        assert!(!nav_style(false).contains("bold"));
    }
}
