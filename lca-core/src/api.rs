//! HTTP client for the electricity LCA backend API.
//!
//! Every call is a GET returning a JSON array. A status outside [200, 300)
//! becomes [`LcaError::Status`]; the body is kept so pages can show the
//! upstream explanation next to their error message.

use crate::dates::format_date;
use crate::error::{LcaError, Result};
use crate::records::{
    decode_records, AvailabilityRecord, DailyCount, GenerationRecord, ImpactRecord, RegionListing,
};
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const AVAILABLE_DATA_REGION: &str = "/available_data_region";
pub const LIST_REGIONS: &str = "/list_regions";
pub const DATAPOINTS_COUNT_BY_DAY: &str = "/datapoints_count_by_day";
pub const GENERATION: &str = "/generation";
pub const CALCULATE: &str = "/calculate";

/// Parameters for `/generation`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationQuery {
    pub region_code: String,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
}

impl GenerationQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("date_start", format_date(&self.date_start))];
        if let Some(end) = &self.date_end {
            params.push(("date_end", format_date(end)));
        }
        params.push(("region_code", self.region_code.clone()));
        params
    }
}

/// Parameters for `/calculate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactQuery {
    pub region_code: String,
    pub date_start: NaiveDate,
    pub impact_category_id: i32,
}

impl ImpactQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date_start", format_date(&self.date_start)),
            ("region_code", self.region_code.clone()),
            ("impact_category_id", self.impact_category_id.to_string()),
        ]
    }
}

/// Map an HTTP status to the body on success or to [`LcaError::Status`].
pub fn check_status(endpoint: &str, status: u16, body: String) -> Result<String> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        warn!(
            "{} not successful. Status code: {}",
            endpoint, status
        );
        Err(LcaError::Status {
            endpoint: endpoint.to_string(),
            status,
            body,
        })
    }
}

/// Backend API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_records<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let request_error = |source| LcaError::Request {
            endpoint: endpoint.to_string(),
            source,
        };
        let response = self
            .client
            .get(self.endpoint_url(endpoint))
            .query(params)
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(request_error)?;
        let body = check_status(endpoint, status, body)?;
        let records = decode_records(endpoint, &body)?;
        info!("{} returned {} records", endpoint, records.len());
        Ok(records)
    }

    /// Data availability for every region.
    pub async fn available_data_region(&self) -> Result<Vec<AvailabilityRecord>> {
        self.get_records(AVAILABLE_DATA_REGION, &[]).await
    }

    /// Regions known to the backend, with their external-source flag.
    pub async fn list_regions(&self) -> Result<Vec<RegionListing>> {
        self.get_records(LIST_REGIONS, &[]).await
    }

    /// Data points per day for one region.
    pub async fn datapoints_count_by_day(&self, region_code: &str) -> Result<Vec<DailyCount>> {
        self.get_records(
            DATAPOINTS_COUNT_BY_DAY,
            &[("region_code", region_code.to_string())],
        )
        .await
    }

    /// Aggregated generation per type and day.
    pub async fn generation(&self, query: &GenerationQuery) -> Result<Vec<GenerationRecord>> {
        self.get_records(GENERATION, &query.params()).await
    }

    /// Environmental impact per type and day for one impact category.
    pub async fn calculate(&self, query: &ImpactQuery) -> Result<Vec<ImpactRecord>> {
        self.get_records(CALCULATE, &query.params()).await
    }
}
