//! Data availability summary: one bar per region plus the overall span.

use crate::outcome::{chart_points, ChartView, PageMessage};
use crate::page::PageConfig;
use chrono::NaiveDateTime;
use lca_core::error::LcaError;
use lca_core::records::AvailabilityRecord;
use serde::Serialize;

/// Bar chart row: data points available for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionBar {
    #[serde(rename = "RegionCode")]
    pub region_code: String,
    #[serde(rename = "CountDataPoints")]
    pub count_data_points: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilitySummary {
    /// The records as returned, for the table view.
    pub records: Vec<AvailabilityRecord>,
    /// One bar per region code, in first-appearance order.
    pub bars: Vec<RegionBar>,
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
}

impl AvailabilitySummary {
    pub fn span_text(&self) -> Option<String> {
        match (self.earliest, self.latest) {
            (Some(earliest), Some(latest)) => Some(format!(
                "Earliest date: {}, Latest date: {}",
                earliest, latest
            )),
            _ => None,
        }
    }

    pub fn chart_view(&self) -> ChartView<RegionBar> {
        let config = PageConfig::availability();
        let points = chart_points(&self.bars, &config).unwrap_or_default();
        ChartView {
            config,
            rows: self.bars.clone(),
            points,
            omitted: 0,
        }
    }

    pub fn records_json(&self) -> String {
        serde_json::to_string(&self.records).unwrap_or_default()
    }
}

/// Collapse records into per-region bars and the overall date span.
///
/// A region reported more than once gets a single bar with the counts summed.
pub fn summarize(records: Vec<AvailabilityRecord>) -> AvailabilitySummary {
    let mut bars: Vec<RegionBar> = Vec::new();
    for record in &records {
        match bars.iter_mut().find(|b| b.region_code == record.region_code) {
            Some(bar) => bar.count_data_points += record.count_data_points,
            None => bars.push(RegionBar {
                region_code: record.region_code.clone(),
                count_data_points: record.count_data_points,
            }),
        }
    }
    let earliest = records.iter().map(|r| r.earliest).min();
    let latest = records.iter().map(|r| r.latest).max();
    AvailabilitySummary {
        records,
        bars,
        earliest,
        latest,
    }
}

/// Availability section of the dashboard.
///
/// A failed fetch yields "Data availability not known", which stops the
/// rest of the dashboard.
pub fn render_availability(
    fetched: Result<Vec<AvailabilityRecord>, LcaError>,
) -> Result<AvailabilitySummary, PageMessage> {
    match fetched {
        Ok(records) if records.is_empty() => Err(PageMessage::NoData),
        Ok(records) => Ok(summarize(records)),
        Err(e) => {
            log::warn!(
                "Data availability not known successful. Status code: {:?}",
                e.status()
            );
            Err(PageMessage::AvailabilityUnknown)
        }
    }
}
