//! SQL schema for the reference tables.
//!
//! Names are quoted so they keep the PascalCase spelling of the PostgreSQL
//! source tables.

/// Table names, in load order.
pub const REFERENCE_TABLES: [&str; 4] = [
    "ElectricityGenerationTypes",
    "ElectricityGenerationTypesMapping",
    "Regions",
    "ImpactCategories",
];

/// Returns the full SQL schema as a single batch string.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS "ElectricityGenerationTypes" (
        "Id" INTEGER PRIMARY KEY,
        "Name" TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS "ElectricityGenerationTypesMapping" (
        "GenerationTypeId" INTEGER PRIMARY KEY,
        "Category" TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS "Regions" (
        "Id" INTEGER PRIMARY KEY,
        "Code" TEXT NOT NULL UNIQUE,
        "Name" TEXT NOT NULL,
        "ExternalSourceAvailable" INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS "ImpactCategories" (
        "Id" INTEGER PRIMARY KEY,
        "Name" TEXT NOT NULL,
        "Unit" TEXT NOT NULL,
        "PerUnit" TEXT NOT NULL
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");

        for table in &REFERENCE_TABLES {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
