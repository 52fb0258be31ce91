//! Joins of API records against the generation-types table.
//!
//! The join is an inner merge on the generation-type id. The reference id
//! column does not survive, the reference name becomes `ElectricityType` and
//! the mapping table contributes an optional `Category`. Records whose id is
//! missing from the reference table are dropped and reported in
//! [`Joined::unmatched_ids`].

use lca_core::records::{GenerationRecord, ImpactRecord};
use lca_core::reference::ReferenceDataset;
use serde::Serialize;

/// A generation record with its electricity type attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRow {
    #[serde(rename = "DateStamp")]
    pub date_stamp: String,
    #[serde(rename = "GenerationTypeId")]
    pub generation_type_id: i32,
    #[serde(rename = "AggregatedGeneration")]
    pub aggregated_generation: f64,
    #[serde(rename = "ElectricityType")]
    pub electricity_type: String,
    #[serde(rename = "Category")]
    pub category: Option<String>,
}

/// An impact record with its electricity type attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactRow {
    #[serde(rename = "DateStamp")]
    pub date_stamp: String,
    #[serde(rename = "ElectricityGenerationTypeId")]
    pub generation_type_id: i32,
    #[serde(rename = "ImpactCategoryId")]
    pub impact_category_id: Option<i32>,
    #[serde(rename = "EnvironmentalImpact")]
    pub environmental_impact: f64,
    #[serde(rename = "ImpactCategoryUnit")]
    pub impact_category_unit: String,
    #[serde(rename = "PerUnit")]
    pub per_unit: String,
    #[serde(rename = "ElectricityType")]
    pub electricity_type: String,
    #[serde(rename = "Category")]
    pub category: Option<String>,
}

/// A record type that can be joined on a generation-type id.
pub trait Joinable {
    type Row: Serialize + Clone;

    fn generation_type_id(&self) -> i32;

    fn into_row(self, electricity_type: String, category: Option<String>) -> Self::Row;
}

impl Joinable for GenerationRecord {
    type Row = GenerationRow;

    fn generation_type_id(&self) -> i32 {
        self.generation_type_id
    }

    fn into_row(self, electricity_type: String, category: Option<String>) -> GenerationRow {
        GenerationRow {
            date_stamp: self.date_stamp,
            generation_type_id: self.generation_type_id,
            aggregated_generation: self.aggregated_generation,
            electricity_type,
            category,
        }
    }
}

impl Joinable for ImpactRecord {
    type Row = ImpactRow;

    fn generation_type_id(&self) -> i32 {
        self.generation_type_id
    }

    fn into_row(self, electricity_type: String, category: Option<String>) -> ImpactRow {
        ImpactRow {
            date_stamp: self.date_stamp,
            generation_type_id: self.generation_type_id,
            impact_category_id: self.impact_category_id,
            environmental_impact: self.environmental_impact,
            impact_category_unit: self.impact_category_unit,
            per_unit: self.per_unit,
            electricity_type,
            category,
        }
    }
}

/// Result of a join: the matched rows plus what was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Joined<T> {
    pub rows: Vec<T>,
    /// Number of input records without a matching generation type.
    pub dropped: usize,
    /// Distinct unmatched ids, ascending.
    pub unmatched_ids: Vec<i32>,
}

/// Inner-join records against the generation-types table, keeping input order.
pub fn join<R: Joinable>(records: Vec<R>, reference: &ReferenceDataset) -> Joined<R::Row> {
    let names = reference.generation_type_names();
    let categories = reference.generation_categories();

    let mut rows = Vec::with_capacity(records.len());
    let mut unmatched_ids = Vec::new();
    let mut dropped = 0usize;
    for record in records {
        let id = record.generation_type_id();
        match names.get(&id) {
            Some(name) => {
                let category = categories.get(&id).map(|c| c.to_string());
                rows.push(record.into_row(name.to_string(), category));
            }
            None => {
                dropped += 1;
                unmatched_ids.push(id);
            }
        }
    }
    unmatched_ids.sort_unstable();
    unmatched_ids.dedup();

    if dropped > 0 {
        log::warn!(
            "join: dropped {} rows with unknown generation type ids {:?}",
            dropped,
            unmatched_ids
        );
    }
    Joined {
        rows,
        dropped,
        unmatched_ids,
    }
}

pub fn join_generation(
    records: Vec<GenerationRecord>,
    reference: &ReferenceDataset,
) -> Joined<GenerationRow> {
    join(records, reference)
}

pub fn join_impact(records: Vec<ImpactRecord>, reference: &ReferenceDataset) -> Joined<ImpactRow> {
    join(records, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reference;

    fn generation(date: &str, id: i32, amount: f64) -> GenerationRecord {
        GenerationRecord {
            date_stamp: date.to_string(),
            generation_type_id: id,
            aggregated_generation: amount,
        }
    }

    #[test]
    fn join_preserves_row_count_when_all_ids_known() {
        let records = vec![
            generation("2024-01-01", 1, 10.0),
            generation("2024-01-01", 2, 20.0),
            generation("2024-01-02", 1, 11.0),
        ];
        let joined = join_generation(records, &reference());
        assert_eq!(joined.rows.len(), 3);
        assert_eq!(joined.dropped, 0);
        assert!(joined.unmatched_ids.is_empty());
        assert_eq!(joined.rows[1].electricity_type, "Wind");
        assert_eq!(joined.rows[0].category.as_deref(), Some("Renewable"));
        assert_eq!(joined.rows[1].category, None);
    }

    #[test]
    fn join_drops_unknown_ids() {
        let records = vec![
            generation("2024-01-01", 1, 10.0),
            generation("2024-01-01", 9, 5.0),
            generation("2024-01-02", 9, 6.0),
            generation("2024-01-02", 7, 1.0),
        ];
        let joined = join_generation(records, &reference());
        assert_eq!(joined.rows.len(), 1);
        assert_eq!(joined.dropped, 3);
        assert_eq!(joined.unmatched_ids, vec![7, 9]);
    }

    #[test]
    fn joined_generation_row_has_no_reference_id_column() {
        let joined = join_generation(vec![generation("2024-01-01", 2, 3.5)], &reference());
        let json = serde_json::to_value(&joined.rows[0]).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("Id"));
        assert!(!object.contains_key("Name"));
        assert_eq!(object["ElectricityType"], "Wind");
        assert_eq!(object["GenerationTypeId"], 2);
    }

    #[test]
    fn join_impact_keeps_units() {
        let records = vec![ImpactRecord {
            date_stamp: "2024-01-01".to_string(),
            generation_type_id: 1,
            impact_category_id: Some(1),
            environmental_impact: 0.05,
            impact_category_unit: "kg CO2 eq".to_string(),
            per_unit: "kWh".to_string(),
        }];
        let joined = join_impact(records, &reference());
        assert_eq!(joined.rows.len(), 1);
        assert_eq!(joined.rows[0].electricity_type, "Solar");
        assert_eq!(joined.rows[0].impact_category_unit, "kg CO2 eq");
    }
}
