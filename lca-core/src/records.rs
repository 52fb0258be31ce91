//! Typed response models for the backend API.
//!
//! Each endpoint decodes into its own record type. Field names follow the
//! API's PascalCase JSON keys. A payload that does not match the record shape
//! is rejected by [`decode_records`] instead of being coerced.

use crate::error::{LcaError, Result};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Per-region data availability from `/available_data_region`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    #[serde(rename = "RegionCode")]
    pub region_code: String,
    #[serde(rename = "EarliestTimeStamp", with = "crate::dates::timestamp")]
    pub earliest: NaiveDateTime,
    #[serde(rename = "LatestTimeStamp", with = "crate::dates::timestamp")]
    pub latest: NaiveDateTime,
    #[serde(rename = "CountDataPoints")]
    pub count_data_points: u64,
}

/// Number of data points for one day, from `/datapoints_count_by_day`.
///
/// The date stamp stays a string here; the calendar pipeline parses it and
/// reports malformed stamps as a region-specific hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCount {
    #[serde(rename = "Datestamp")]
    pub datestamp: String,
    pub count: u64,
}

/// Aggregated generation for one generation type and day, from `/generation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    #[serde(rename = "DateStamp")]
    pub date_stamp: String,
    #[serde(rename = "GenerationTypeId")]
    pub generation_type_id: i32,
    #[serde(rename = "AggregatedGeneration")]
    pub aggregated_generation: f64,
}

/// Environmental impact for one generation type and day, from `/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactRecord {
    #[serde(rename = "DateStamp")]
    pub date_stamp: String,
    #[serde(rename = "ElectricityGenerationTypeId")]
    pub generation_type_id: i32,
    /// Present when the API echoes the requested category.
    #[serde(
        rename = "ImpactCategoryId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub impact_category_id: Option<i32>,
    #[serde(rename = "EnvironmentalImpact")]
    pub environmental_impact: f64,
    #[serde(rename = "ImpactCategoryUnit")]
    pub impact_category_unit: String,
    #[serde(rename = "PerUnit")]
    pub per_unit: String,
}

/// One region from `/list_regions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionListing {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "ExternalSourceAvailable", default)]
    pub external_source_available: bool,
}

/// Decode a JSON array of records returned by `endpoint`.
pub fn decode_records<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<Vec<T>> {
    serde_json::from_str(body).map_err(|source| LcaError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_availability() {
        let body = r#"[
            {"RegionCode": "DE", "EarliestTimeStamp": "2023-01-01T00:00:00",
             "LatestTimeStamp": "2024-06-30T23:00:00", "CountDataPoints": 12840},
            {"RegionCode": "FR", "EarliestTimeStamp": "2023-03-01T00:00:00+00:00",
             "LatestTimeStamp": "2024-06-30T23:00:00+00:00", "CountDataPoints": 9120}
        ]"#;
        let records: Vec<AvailabilityRecord> =
            decode_records("/available_data_region", body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region_code, "DE");
        assert_eq!(records[1].count_data_points, 9120);
        assert_eq!(records[1].earliest.to_string(), "2023-03-01 00:00:00");
    }

    #[test]
    fn decode_generation() {
        let body = r#"[
            {"DateStamp": "2024-01-01", "GenerationTypeId": 1, "AggregatedGeneration": 120.5},
            {"DateStamp": "2024-01-01", "GenerationTypeId": 2, "AggregatedGeneration": 300}
        ]"#;
        let records: Vec<GenerationRecord> = decode_records("/generation", body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].generation_type_id, 2);
        assert!((records[1].aggregated_generation - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decode_impact_without_category_id() {
        let body = r#"[{"DateStamp": "2024-01-01", "ElectricityGenerationTypeId": 3,
            "EnvironmentalImpact": 0.42, "ImpactCategoryUnit": "kg CO2 eq", "PerUnit": "kWh"}]"#;
        let records: Vec<ImpactRecord> = decode_records("/calculate", body).unwrap();
        assert_eq!(records[0].impact_category_id, None);
        assert_eq!(records[0].per_unit, "kWh");
    }

    #[test]
    fn decode_region_listing_defaults() {
        let body = r#"[{"Code": "DE", "ExternalSourceAvailable": true}, {"Code": "PL"}]"#;
        let regions: Vec<RegionListing> = decode_records("/list_regions", body).unwrap();
        assert!(regions[0].external_source_available);
        assert!(!regions[1].external_source_available);
        assert_eq!(regions[1].name, None);
    }

    #[test]
    fn decode_empty_array() {
        let counts: Vec<DailyCount> = decode_records("/datapoints_count_by_day", "[]").unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let err = decode_records::<GenerationRecord>(
            "/generation",
            r#"{"detail": "region not found"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LcaError::Decode { ref endpoint, .. } if endpoint == "/generation"));

        let err = decode_records::<GenerationRecord>(
            "/generation",
            r#"[{"DateStamp": "2024-01-01", "GenerationTypeId": "solar", "AggregatedGeneration": 1}]"#,
        )
        .unwrap_err();
        assert!(!err.is_upstream());
    }
}
