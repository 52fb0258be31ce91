//! Join-and-render pipeline for the LCA dashboard pages.
//!
//! Every page follows the same steps: fetch records, treat an empty payload
//! as "no data", join against the reference tables, rename the display
//! columns and hand the table to a chart. This crate holds those steps as
//! plain functions so the Dioxus pages and the CLI share them.
//!
//! - `page`: the page configuration value object
//! - `join`: id joins against the generation-types table
//! - `render`: the single parameterized renderer
//! - `outcome`: chart views and the user-facing messages
//! - `availability`: per-region bars and overall date span
//! - `calendar`: date-picker bounds and the daily heatmap

pub mod availability;
pub mod calendar;
pub mod join;
pub mod outcome;
pub mod page;
pub mod render;

pub use outcome::{ChartPoint, ChartView, PageMessage, PageOutcome};
pub use page::{ChartKind, PageConfig};
pub use render::render_page;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};
    use lca_core::reference::{
        GenerationType, GenerationTypeMapping, ImpactCategory, ReferenceDataset, Region,
    };

    /// Solar (1) and Wind (2) with a category for Solar only.
    pub fn reference() -> ReferenceDataset {
        ReferenceDataset {
            generation_types: vec![
                GenerationType { id: 1, name: "Solar".to_string() },
                GenerationType { id: 2, name: "Wind".to_string() },
            ],
            generation_type_mappings: vec![GenerationTypeMapping {
                generation_type_id: 1,
                category: "Renewable".to_string(),
            }],
            regions: vec![Region {
                id: 1,
                code: "DE".to_string(),
                name: "Germany".to_string(),
                external_source_available: true,
            }],
            impact_categories: vec![ImpactCategory {
                id: 1,
                name: "Climate change".to_string(),
                unit: "kg CO2 eq".to_string(),
                per_unit: "kWh".to_string(),
            }],
            retrieved_at: Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap(),
        }
    }
}
