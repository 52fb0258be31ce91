//! The four reference-table read queries.
//!
//! [`Database::load_reference_data`] runs all four and stamps the result
//! with the retrieval time. Any failing query fails the whole load; there is
//! no partial dataset.

use crate::Database;
use chrono::Utc;
use lca_core::reference::{
    GenerationType, GenerationTypeMapping, ImpactCategory, ReferenceDataset, Region,
};

impl Database {
    /// Get all generation types, ordered by id.
    pub fn query_generation_types(&self) -> anyhow::Result<Vec<GenerationType>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            r#"SELECT "Id", "Name" FROM "ElectricityGenerationTypes" ORDER BY "Id""#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(GenerationType {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_generation_types returned {} records", rows.len());
        Ok(rows)
    }

    /// Get the generation-type-to-category mapping, ordered by generation type id.
    pub fn query_generation_type_mappings(&self) -> anyhow::Result<Vec<GenerationTypeMapping>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            r#"SELECT "GenerationTypeId", "Category" FROM "ElectricityGenerationTypesMapping"
               ORDER BY "GenerationTypeId""#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(GenerationTypeMapping {
                    generation_type_id: row.get(0)?,
                    category: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_generation_type_mappings returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get all regions, ordered by id.
    pub fn query_regions(&self) -> anyhow::Result<Vec<Region>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            r#"SELECT "Id", "Code", "Name", "ExternalSourceAvailable" FROM "Regions" ORDER BY "Id""#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Region {
                    id: row.get(0)?,
                    code: row.get(1)?,
                    name: row.get(2)?,
                    external_source_available: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_regions returned {} records", rows.len());
        Ok(rows)
    }

    /// Get all impact categories, ordered by id.
    pub fn query_impact_categories(&self) -> anyhow::Result<Vec<ImpactCategory>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            r#"SELECT "Id", "Name", "Unit", "PerUnit" FROM "ImpactCategories" ORDER BY "Id""#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ImpactCategory {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    unit: row.get(2)?,
                    per_unit: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_impact_categories returned {} records", rows.len());
        Ok(rows)
    }

    /// Run the four reference queries and bundle the results.
    pub fn load_reference_data(&self) -> anyhow::Result<ReferenceDataset> {
        let generation_types = self.query_generation_types()?;
        let generation_type_mappings = self.query_generation_type_mappings()?;
        let regions = self.query_regions()?;
        let retrieved_at = Utc::now();
        let impact_categories = self.query_impact_categories()?;
        Ok(ReferenceDataset {
            generation_types,
            generation_type_mappings,
            regions,
            impact_categories,
            retrieved_at,
        })
    }
}
