//! In-memory SQLite store for the electricity LCA reference tables.
//!
//! The dashboard cannot reach the PostgreSQL reference database from the
//! browser. Instead, `lca-cli snapshot-reference` writes the four reference
//! tables to CSV, the dashboard embeds those snapshots at build time, and this
//! crate loads them into an in-memory SQLite database at session start.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Table and column names match the PostgreSQL source, so the four reference
//!   queries read the same on both stores
//!
//! # Usage
//!
//! ```rust
//! use lca_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_generation_types("Id,Name\n1,Solar\n2,Wind\n").unwrap();
//! db.load_regions("Id,Code,Name,ExternalSourceAvailable\n1,DE,Germany,true\n").unwrap();
//!
//! let reference = db.load_reference_data().unwrap();
//! assert_eq!(reference.generation_types.len(), 2);
//! assert!(reference.impact_categories.is_empty());
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the reference tables.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV snapshots.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_generation_types("Id,Name\n1,Solar\n").unwrap();
        let types = db2.query_generation_types().unwrap();
        assert_eq!(types.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let reference = db.load_reference_data().unwrap();
        assert!(reference.generation_types.is_empty());
        assert!(reference.regions.is_empty());
    }
}
