//! CSV snapshot loaders for populating the in-memory SQLite database.
//!
//! Each loader parses a headed CSV snapshot and inserts its rows into the
//! corresponding table. The snapshots are written by
//! `lca-cli snapshot-reference`.
//!
//! # CSV Formats
//!
//! - **Generation types**: `Id,Name`
//! - **Generation type mappings**: `GenerationTypeId,Category`
//! - **Regions**: `Id,Code,Name,ExternalSourceAvailable`
//! - **Impact categories**: `Id,Name,Unit,PerUnit`

use crate::Database;
use anyhow::Context;
use lca_core::reference::{GenerationType, GenerationTypeMapping, ImpactCategory};
use rusqlite::params;

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes())
}

/// Parse a boolean flag as written by PostgreSQL or by serde.
fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Ok(true),
        "false" | "f" | "0" | "no" | "" => Ok(false),
        other => anyhow::bail!("invalid boolean flag {:?}", other),
    }
}

impl Database {
    /// Load generation types from CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// Id,Name
    /// 1,Solar
    /// 2,Wind Onshore
    /// ```
    pub fn load_generation_types(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for result in reader(csv_data).deserialize::<GenerationType>() {
            let row = result?;
            conn.execute(
                r#"INSERT OR REPLACE INTO "ElectricityGenerationTypes" ("Id", "Name")
                   VALUES (?1, ?2)"#,
                params![row.id, row.name],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} generation types", count);
        Ok(())
    }

    /// Load the generation-type-to-category mapping from CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// GenerationTypeId,Category
    /// 1,Renewable
    /// ```
    pub fn load_generation_type_mappings(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for result in reader(csv_data).deserialize::<GenerationTypeMapping>() {
            let row = result?;
            conn.execute(
                r#"INSERT OR REPLACE INTO "ElectricityGenerationTypesMapping" ("GenerationTypeId", "Category")
                   VALUES (?1, ?2)"#,
                params![row.generation_type_id, row.category],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} generation type mappings", count);
        Ok(())
    }

    /// Load regions from CSV string.
    ///
    /// The `ExternalSourceAvailable` flag accepts `true`/`false`, `t`/`f`
    /// and `1`/`0`; an empty cell counts as false.
    ///
    /// # Example CSV
    /// ```text
    /// Id,Code,Name,ExternalSourceAvailable
    /// 1,DE,Germany,true
    /// ```
    pub fn load_regions(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id: i32 = r.get(0).unwrap_or("").parse().context("region Id")?;
            let code = r.get(1).unwrap_or("");
            let name = r.get(2).unwrap_or("");
            let external = parse_flag(r.get(3).unwrap_or(""))?;
            if code.is_empty() {
                anyhow::bail!("region {} has an empty Code", id);
            }

            conn.execute(
                r#"INSERT OR REPLACE INTO "Regions" ("Id", "Code", "Name", "ExternalSourceAvailable")
                   VALUES (?1, ?2, ?3, ?4)"#,
                params![id, code, name, external],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} regions", count);
        Ok(())
    }

    /// Load impact categories from CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// Id,Name,Unit,PerUnit
    /// 1,Climate change,kg CO2 eq,kWh
    /// ```
    pub fn load_impact_categories(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for result in reader(csv_data).deserialize::<ImpactCategory>() {
            let row = result?;
            conn.execute(
                r#"INSERT OR REPLACE INTO "ImpactCategories" ("Id", "Name", "Unit", "PerUnit")
                   VALUES (?1, ?2, ?3, ?4)"#,
                params![row.id, row.name, row.unit, row.per_unit],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} impact categories", count);
        Ok(())
    }
}
