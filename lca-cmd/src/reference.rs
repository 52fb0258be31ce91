//! Reference tables from PostgreSQL, and the CSV snapshots the dashboard embeds.

use chrono::Utc;
use lca_core::reference::{
    GenerationType, GenerationTypeMapping, ImpactCategory, ReferenceDataset, Region,
};
use lca_db::Database;
use log::info;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use std::fs;
use std::path::Path;

pub const GENERATION_TYPES_FILE: &str = "generation_types.csv";
pub const GENERATION_TYPE_MAPPINGS_FILE: &str = "generation_type_mappings.csv";
pub const REGIONS_FILE: &str = "regions.csv";
pub const IMPACT_CATEGORIES_FILE: &str = "impact_categories.csv";

#[derive(Debug, FromRow)]
struct GenerationTypeRow {
    #[sqlx(rename = "Id")]
    id: i32,
    #[sqlx(rename = "Name")]
    name: String,
}

#[derive(Debug, FromRow)]
struct GenerationTypeMappingRow {
    #[sqlx(rename = "GenerationTypeId")]
    generation_type_id: i32,
    #[sqlx(rename = "Category")]
    category: String,
}

#[derive(Debug, FromRow)]
struct RegionRow {
    #[sqlx(rename = "Id")]
    id: i32,
    #[sqlx(rename = "Code")]
    code: String,
    #[sqlx(rename = "Name")]
    name: Option<String>,
    #[sqlx(rename = "ExternalSourceAvailable")]
    external_source_available: Option<bool>,
}

#[derive(Debug, FromRow)]
struct ImpactCategoryRow {
    #[sqlx(rename = "Id")]
    id: i32,
    #[sqlx(rename = "Name")]
    name: String,
    #[sqlx(rename = "Unit")]
    unit: Option<String>,
    #[sqlx(rename = "PerUnit")]
    per_unit: Option<String>,
}

/// Run the four reference queries against PostgreSQL.
///
/// Any failing query fails the whole load.
pub async fn load_reference_data(pool: &PgPool) -> anyhow::Result<ReferenceDataset> {
    let generation_types: Vec<GenerationTypeRow> = sqlx::query_as(
        r#"SELECT "Id", "Name" FROM public."ElectricityGenerationTypes" ORDER BY "Id""#,
    )
    .fetch_all(pool)
    .await?;
    info!("ElectricityGenerationTypes: {} rows", generation_types.len());

    let mappings: Vec<GenerationTypeMappingRow> = sqlx::query_as(
        r#"SELECT "GenerationTypeId", "Category" FROM public."ElectricityGenerationTypesMapping"
           ORDER BY "GenerationTypeId""#,
    )
    .fetch_all(pool)
    .await?;
    info!("ElectricityGenerationTypesMapping: {} rows", mappings.len());

    let regions: Vec<RegionRow> = sqlx::query_as(
        r#"SELECT "Id", "Code", "Name", "ExternalSourceAvailable" FROM public."Regions" ORDER BY "Id""#,
    )
    .fetch_all(pool)
    .await?;
    info!("Regions: {} rows", regions.len());

    let impact_categories: Vec<ImpactCategoryRow> = sqlx::query_as(
        r#"SELECT "Id", "Name", "Unit", "PerUnit" FROM public."ImpactCategories" ORDER BY "Id""#,
    )
    .fetch_all(pool)
    .await?;
    info!("ImpactCategories: {} rows", impact_categories.len());

    Ok(ReferenceDataset {
        generation_types: generation_types
            .into_iter()
            .map(|r| GenerationType { id: r.id, name: r.name })
            .collect(),
        generation_type_mappings: mappings
            .into_iter()
            .map(|r| GenerationTypeMapping {
                generation_type_id: r.generation_type_id,
                category: r.category,
            })
            .collect(),
        regions: regions
            .into_iter()
            .map(|r| Region {
                id: r.id,
                code: r.code,
                name: r.name.unwrap_or_default(),
                external_source_available: r.external_source_available.unwrap_or(false),
            })
            .collect(),
        impact_categories: impact_categories
            .into_iter()
            .map(|r| ImpactCategory {
                id: r.id,
                name: r.name,
                unit: r.unit.unwrap_or_default(),
                per_unit: r.per_unit.unwrap_or_default(),
            })
            .collect(),
        retrieved_at: Utc::now(),
    })
}

fn write_table<T: Serialize>(path: &Path, rows: &[T], header: &[&str]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the four tables as CSV snapshots into `dir`, creating it if needed.
///
/// Headers are always written so an empty table still loads.
pub fn write_snapshot(reference: &ReferenceDataset, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    write_table(
        &dir.join(GENERATION_TYPES_FILE),
        &reference.generation_types,
        &["Id", "Name"],
    )?;
    write_table(
        &dir.join(GENERATION_TYPE_MAPPINGS_FILE),
        &reference.generation_type_mappings,
        &["GenerationTypeId", "Category"],
    )?;
    write_table(
        &dir.join(REGIONS_FILE),
        &reference.regions,
        &["Id", "Code", "Name", "ExternalSourceAvailable"],
    )?;
    write_table(
        &dir.join(IMPACT_CATEGORIES_FILE),
        &reference.impact_categories,
        &["Id", "Name", "Unit", "PerUnit"],
    )?;
    Ok(())
}

/// Load a snapshot directory through the in-memory store, the same path the
/// dashboard takes.
pub fn read_snapshot(dir: &Path) -> anyhow::Result<ReferenceDataset> {
    let db = Database::new()?;
    db.load_generation_types(&fs::read_to_string(dir.join(GENERATION_TYPES_FILE))?)?;
    db.load_generation_type_mappings(&fs::read_to_string(
        dir.join(GENERATION_TYPE_MAPPINGS_FILE),
    )?)?;
    db.load_regions(&fs::read_to_string(dir.join(REGIONS_FILE))?)?;
    db.load_impact_categories(&fs::read_to_string(dir.join(IMPACT_CATEGORIES_FILE))?)?;
    db.load_reference_data()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> ReferenceDataset {
        ReferenceDataset {
            generation_types: vec![
                GenerationType { id: 1, name: "Solar".to_string() },
                GenerationType { id: 2, name: "Wind Onshore".to_string() },
            ],
            generation_type_mappings: vec![GenerationTypeMapping {
                generation_type_id: 2,
                category: "Renewable".to_string(),
            }],
            regions: vec![Region {
                id: 5,
                code: "DE".to_string(),
                name: "Germany, incl. Luxembourg".to_string(),
                external_source_available: true,
            }],
            impact_categories: Vec::new(),
            retrieved_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn snapshot_round_trips_through_in_memory_store() {
        let dir = tempfile::tempdir().unwrap();
        let reference = sample();
        write_snapshot(&reference, dir.path()).unwrap();

        let loaded = read_snapshot(dir.path()).unwrap();
        assert_eq!(loaded.generation_types, reference.generation_types);
        assert_eq!(loaded.generation_type_mappings, reference.generation_type_mappings);
        assert_eq!(loaded.regions, reference.regions);
        assert!(loaded.impact_categories.is_empty());
    }

    #[test]
    fn empty_table_still_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(&sample(), dir.path()).unwrap();
        let text = fs::read_to_string(dir.path().join(IMPACT_CATEGORIES_FILE)).unwrap();
        assert_eq!(text.trim(), "Id,Name,Unit,PerUnit");
    }

    #[test]
    fn missing_snapshot_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_snapshot(dir.path()).is_err());
    }
}
