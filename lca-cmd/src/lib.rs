//! Command implementations for the LCA CLI.
//!
//! Provides a subcommand that snapshots the PostgreSQL reference tables for
//! the dashboard, and subcommands that print each dashboard page as CSV.

use chrono::NaiveDate;
use clap::Subcommand;
use lca_core::api::ApiClient;
use lca_core::reference::ReferenceDataset;
use std::path::PathBuf;

pub mod config;
pub mod pages;
pub mod reference;

use config::{DbConfig, SourceConfig};

#[derive(Subcommand)]
pub enum Command {
    /// Snapshot the reference tables from PostgreSQL into CSV files
    SnapshotReference {
        /// Output directory for the four reference CSVs
        #[arg(short = 'o', long, default_value = "fixtures/reference")]
        out_dir: PathBuf,

        #[command(flatten)]
        db: DbConfig,
    },

    /// Regions known to the backend API
    Regions {
        #[command(flatten)]
        source: SourceConfig,
    },

    /// Data points per region and the overall date span
    Availability {
        #[command(flatten)]
        source: SourceConfig,
    },

    /// Data points per day for one region
    Calendar {
        #[arg(short = 'r', long)]
        region: String,

        #[command(flatten)]
        source: SourceConfig,
    },

    /// Electricity generation by type for a region and period
    Generation {
        #[arg(short = 'r', long)]
        region: String,

        /// First day (YYYY-MM-DD)
        #[arg(short = 's', long)]
        start: NaiveDate,

        /// Last day (YYYY-MM-DD); the API decides when omitted
        #[arg(short = 'e', long)]
        end: Option<NaiveDate>,

        #[command(flatten)]
        source: SourceConfig,
    },

    /// Environmental impact by generation type
    Impact {
        #[arg(short = 'r', long)]
        region: String,

        /// First day (YYYY-MM-DD)
        #[arg(short = 's', long)]
        start: NaiveDate,

        /// Impact category id; all categories when omitted
        #[arg(short = 'c', long)]
        category: Option<i32>,

        #[command(flatten)]
        source: SourceConfig,
    },
}

/// Reference tables from the snapshot directory if given, else PostgreSQL.
async fn load_reference(source: &SourceConfig) -> anyhow::Result<ReferenceDataset> {
    let reference = match &source.reference_dir {
        Some(dir) => reference::read_snapshot(dir)?,
        None => {
            let pool = source.db.connect().await?;
            reference::load_reference_data(&pool).await?
        }
    };
    log::info!(
        "reference data retrieved at {}: {} regions, {} impact categories",
        reference.retrieved_at,
        reference.regions.len(),
        reference.impact_categories.len()
    );
    Ok(reference)
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::SnapshotReference { out_dir, db } => {
            let pool = db.connect().await?;
            let reference = reference::load_reference_data(&pool).await?;
            reference::write_snapshot(&reference, &out_dir)
        }
        Command::Regions { source } => pages::run_regions(&ApiClient::new(&source.api_url)).await,
        Command::Availability { source } => {
            pages::run_availability(&ApiClient::new(&source.api_url)).await
        }
        Command::Calendar { region, source } => {
            pages::run_calendar(&ApiClient::new(&source.api_url), &region).await
        }
        Command::Generation {
            region,
            start,
            end,
            source,
        } => {
            let reference = load_reference(&source).await?;
            let api = ApiClient::new(&source.api_url);
            pages::run_generation(&api, &reference, &region, start, end).await
        }
        Command::Impact {
            region,
            start,
            category,
            source,
        } => {
            let reference = load_reference(&source).await?;
            let api = ApiClient::new(&source.api_url);
            pages::run_impact(&api, &reference, &region, start, category).await
        }
    }
}
