//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use chrono::NaiveDate;
use lca_core::api::ApiClient;
use lca_core::date_range::DateRange;
use lca_core::reference::ReferenceDataset;
use lca_data::calendar::DateBounds;
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared state for the dashboard session.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Reference tables, loaded once at session start (None until loaded)
    pub reference: Signal<Option<Rc<ReferenceDataset>>>,
    /// Backend API client
    pub api: Signal<ApiClient>,
    /// Whether the session is still loading
    pub loading: Signal<bool>,
    /// Startup-fatal error, if any
    pub error_msg: Signal<Option<String>>,
    /// Currently selected region code
    pub selected_region: Signal<String>,
    /// Overall availability span, used to lay out the calendar
    pub availability_span: Signal<Option<DateRange>>,
    /// Date-picker bounds for the selected region
    pub date_bounds: Signal<Option<DateBounds>>,
    /// Start date (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// End date (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Selected impact category id
    pub impact_category: Signal<Option<i32>>,
}

impl AppState {
    /// Create a new AppState talking to the API at `api_url`.
    pub fn new(api_url: &str) -> Self {
        Self {
            reference: Signal::new(None),
            api: Signal::new(ApiClient::new(api_url)),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_region: Signal::new(String::new()),
            availability_span: Signal::new(None),
            date_bounds: Signal::new(None),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            impact_category: Signal::new(None),
        }
    }

    /// Install the reference tables and select the first region and impact
    /// category they list.
    pub fn set_reference(&mut self, reference: ReferenceDataset) {
        if let Some(code) = reference.region_codes().first() {
            self.selected_region.set(code.to_string());
        }
        self.impact_category
            .set(reference.impact_categories.first().map(|c| c.id));
        self.reference.set(Some(Rc::new(reference)));
        self.loading.set(false);
    }

    /// Store new date-picker bounds and reset the picked range to cover them.
    pub fn set_date_bounds(&mut self, bounds: Option<DateBounds>) {
        match bounds {
            Some(b) => {
                self.start_date.set(lca_core::dates::format_date(&b.earliest));
                self.end_date.set(lca_core::dates::format_date(&b.latest));
            }
            None => {
                self.start_date.set(String::new());
                self.end_date.set(String::new());
            }
        }
        self.date_bounds.set(bounds);
    }

    /// The picked start date, if it parses.
    pub fn start(&self) -> Option<NaiveDate> {
        lca_core::dates::parse_datestamp(&(self.start_date)()).ok()
    }

    /// The picked end date, if it parses.
    pub fn end(&self) -> Option<NaiveDate> {
        lca_core::dates::parse_datestamp(&(self.end_date)()).ok()
    }
}
