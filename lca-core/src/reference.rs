//! Reference tables loaded once per dashboard session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A row of `ElectricityGenerationTypes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationType {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A row of `ElectricityGenerationTypesMapping`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationTypeMapping {
    #[serde(rename = "GenerationTypeId")]
    pub generation_type_id: i32,
    #[serde(rename = "Category")]
    pub category: String,
}

/// A row of `Regions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "Id")]
    pub id: i32,
    /// Short region identifier (e.g. "DE" for a bidding zone).
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Whether external-source generation data exists for this region.
    #[serde(rename = "ExternalSourceAvailable")]
    pub external_source_available: bool,
}

/// A row of `ImpactCategories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactCategory {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    /// Unit of the impact value (e.g. "kg CO2 eq").
    #[serde(rename = "Unit")]
    pub unit: String,
    /// Functional basis the value is expressed against (e.g. "kWh").
    #[serde(rename = "PerUnit")]
    pub per_unit: String,
}

/// The four reference tables plus the time they were read.
///
/// Built once at session start and never mutated; pages receive it by
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceDataset {
    pub generation_types: Vec<GenerationType>,
    pub generation_type_mappings: Vec<GenerationTypeMapping>,
    pub regions: Vec<Region>,
    pub impact_categories: Vec<ImpactCategory>,
    pub retrieved_at: DateTime<Utc>,
}

impl ReferenceDataset {
    /// Generation type names keyed by id, for joins.
    pub fn generation_type_names(&self) -> HashMap<i32, &str> {
        self.generation_types
            .iter()
            .map(|t| (t.id, t.name.as_str()))
            .collect()
    }

    /// Category names keyed by generation type id.
    pub fn generation_categories(&self) -> HashMap<i32, &str> {
        self.generation_type_mappings
            .iter()
            .map(|m| (m.generation_type_id, m.category.as_str()))
            .collect()
    }

    pub fn region(&self, code: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.code == code)
    }

    pub fn impact_category(&self, id: i32) -> Option<&ImpactCategory> {
        self.impact_categories.iter().find(|c| c.id == id)
    }

    /// Region codes in table order, for selection lists.
    pub fn region_codes(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.code.as_str()).collect()
    }
}
