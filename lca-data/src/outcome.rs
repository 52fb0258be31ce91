//! What a page shows: either a chart view or a one-line message.

use crate::page::PageConfig;
use lca_core::error::{LcaError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// User-facing text shown instead of a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum PageMessage {
    /// A 2xx response without rows.
    NoData,
    /// An upstream call failed; the rest of the page is skipped.
    /// `detail` carries the upstream response body when there is one.
    CalculationError { detail: Option<String> },
    /// `/available_data_region` failed.
    AvailabilityUnknown,
    /// The daily counts for a region came back empty.
    NoDataForRegion(String),
    /// The daily counts for a region could not be read as dates.
    TryDifferentRegion(String),
}

impl PageMessage {
    /// Classify a failed fetch. Upstream failures become a calculation
    /// error carrying the response body.
    pub fn from_error(err: &LcaError) -> Self {
        let detail = match err {
            LcaError::Status { body, .. } if !body.trim().is_empty() => Some(body.clone()),
            LcaError::Status { .. } => None,
            other => Some(other.to_string()),
        };
        PageMessage::CalculationError { detail }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            PageMessage::CalculationError { detail } => detail.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for PageMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMessage::NoData => write!(f, "No data available"),
            PageMessage::CalculationError { .. } => write!(f, "Calculation Error"),
            PageMessage::AvailabilityUnknown => write!(f, "Data availability not known"),
            PageMessage::NoDataForRegion(code) => write!(f, "No data for region {}", code),
            PageMessage::TryDifferentRegion(code) => {
                write!(f, "No data for {}, try a different region code", code)
            }
        }
    }
}

/// One chart mark: x and y values plus the series it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

fn field<'a>(object: &'a Value, name: &str) -> Result<&'a Value> {
    object
        .get(name)
        .ok_or_else(|| LcaError::InvalidFormat(format!("missing column {}", name)))
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Read the configured x, y and series columns out of each row.
pub fn chart_points<T: Serialize>(rows: &[T], config: &PageConfig) -> Result<Vec<ChartPoint>> {
    rows.iter()
        .map(|row| {
            let object = serde_json::to_value(row)
                .map_err(|e| LcaError::InvalidFormat(e.to_string()))?;
            let x = field_text(field(&object, &config.x_field)?);
            let y = field(&object, &config.y_field)?.as_f64().ok_or_else(|| {
                LcaError::InvalidFormat(format!("column {} is not numeric", config.y_field))
            })?;
            let series = match &config.series_field {
                Some(name) => Some(field_text(field(&object, name)?)),
                None => None,
            };
            Ok(ChartPoint { x, y, series })
        })
        .collect()
}

/// A joined table ready for the chart call and the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView<T> {
    pub config: PageConfig,
    pub rows: Vec<T>,
    pub points: Vec<ChartPoint>,
    /// Rows dropped by the join for lack of a reference entry.
    pub omitted: usize,
}

impl<T: Serialize> ChartView<T> {
    /// Full joined table for the collapsible detail view.
    pub fn table_json(&self) -> String {
        serde_json::to_string(&self.rows).unwrap_or_default()
    }

    pub fn points_json(&self) -> String {
        serde_json::to_string(&self.points).unwrap_or_default()
    }

    /// Distinct x values in first-appearance order.
    pub fn x_domain(&self) -> Vec<&str> {
        let mut domain: Vec<&str> = Vec::new();
        for point in &self.points {
            if !domain.contains(&point.x.as_str()) {
                domain.push(&point.x);
            }
        }
        domain
    }

    /// Distinct series names in first-appearance order.
    pub fn series(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.points.iter().filter_map(|p| p.series.as_deref()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub fn omitted_note(&self) -> Option<String> {
        (self.omitted > 0).then(|| {
            format!(
                "{} rows with an unknown generation type were omitted",
                self.omitted
            )
        })
    }
}

/// Either a chart or the message that replaces it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<T> {
    Chart(ChartView<T>),
    Message(PageMessage),
}

impl<T> PageOutcome<T> {
    pub fn is_chart(&self) -> bool {
        matches!(self, PageOutcome::Chart(_))
    }

    pub fn message(&self) -> Option<&PageMessage> {
        match self {
            PageOutcome::Message(message) => Some(message),
            PageOutcome::Chart(_) => None,
        }
    }

    /// True when the failure should stop the rest of the page.
    pub fn aborts_page(&self) -> bool {
        matches!(
            self,
            PageOutcome::Message(PageMessage::CalculationError { .. })
                | PageOutcome::Message(PageMessage::AvailabilityUnknown)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageConfig;
    use serde_json::json;

    #[test]
    fn message_texts() {
        assert_eq!(PageMessage::NoData.to_string(), "No data available");
        assert_eq!(
            PageMessage::CalculationError { detail: None }.to_string(),
            "Calculation Error"
        );
        assert_eq!(
            PageMessage::NoDataForRegion("DE".into()).to_string(),
            "No data for region DE"
        );
        assert_eq!(
            PageMessage::TryDifferentRegion("PL".into()).to_string(),
            "No data for PL, try a different region code"
        );
    }

    #[test]
    fn from_status_error_keeps_body() {
        let err = LcaError::Status {
            endpoint: "/calculate".into(),
            status: 422,
            body: "impact_category_id out of range".into(),
        };
        let message = PageMessage::from_error(&err);
        assert_eq!(message.detail(), Some("impact_category_id out of range"));
        assert_eq!(message.to_string(), "Calculation Error");
    }

    #[test]
    fn chart_points_read_configured_columns() {
        let rows = vec![
            json!({"DateStamp": "2024-01-01", "AggregatedGeneration": 4.0, "ElectricityType": "Solar"}),
            json!({"DateStamp": "2024-01-02", "AggregatedGeneration": 5, "ElectricityType": "Wind"}),
        ];
        let points = chart_points(&rows, &PageConfig::generation()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].x, "2024-01-02");
        assert!((points[1].y - 5.0).abs() < f64::EPSILON);
        assert_eq!(points[0].series.as_deref(), Some("Solar"));
    }

    #[test]
    fn chart_points_reject_missing_column() {
        let rows = vec![json!({"DateStamp": "2024-01-01"})];
        assert!(chart_points(&rows, &PageConfig::generation()).is_err());
    }

    #[test]
    fn outcome_abort_classification() {
        let abort: PageOutcome<()> =
            PageOutcome::Message(PageMessage::CalculationError { detail: None });
        let empty: PageOutcome<()> = PageOutcome::Message(PageMessage::NoData);
        assert!(abort.aborts_page());
        assert!(!empty.aborts_page());
        assert!(!empty.is_chart());
    }
}
