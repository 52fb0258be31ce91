//! Reusable Dioxus RSX components for the LCA dashboard.

mod chart_container;
mod chart_header;
mod data_expander;
mod date_range_picker;
mod error_display;
mod impact_category_tabs;
mod loading_spinner;
mod message_display;
mod region_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use data_expander::DataExpander;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use impact_category_tabs::ImpactCategoryTabs;
pub use loading_spinner::LoadingSpinner;
pub use message_display::MessageDisplay;
pub use region_selector::RegionSelector;
