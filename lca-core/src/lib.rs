//! Core types for the electricity LCA dashboard.
//!
//! - `records`: typed response models, one per backend API endpoint
//! - `reference`: the reference tables loaded once per session
//! - `dates`: date stamp parsing shared by the API models and the pipeline
//! - `api`: the backend HTTP client (behind the `api` feature)

#[cfg(feature = "api")]
pub mod api;
pub mod date_range;
pub mod dates;
pub mod error;
pub mod records;
pub mod reference;

pub use error::{LcaError, Result};
