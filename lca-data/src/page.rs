//! Page configuration: what a page charts and how it labels it.

use lca_core::reference::ImpactCategory;
use serde::Serialize;

/// Chart widget used for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Area,
    Line,
    Bar,
}

/// Value object describing one chart page.
///
/// The field names refer to columns of the joined table; the renderer reads
/// the x, y and series values from those columns. The struct serializes to
/// the config object the chart scripts expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub title: String,
    pub chart: ChartKind,
    pub x_field: String,
    pub y_field: String,
    /// Column grouping rows into series; `None` draws a single series.
    pub series_field: Option<String>,
    pub x_label: String,
    pub y_label: String,
}

impl PageConfig {
    /// Generation mix over time, one series per electricity type.
    pub fn generation() -> Self {
        Self {
            title: "Electricity generation".to_string(),
            chart: ChartKind::Area,
            x_field: "DateStamp".to_string(),
            y_field: "AggregatedGeneration".to_string(),
            series_field: Some("ElectricityType".to_string()),
            x_label: "Date".to_string(),
            y_label: "Generation".to_string(),
        }
    }

    /// Environmental impact for one category, one series per electricity type.
    pub fn impact(category: &ImpactCategory) -> Self {
        Self {
            title: category.name.clone(),
            chart: ChartKind::Bar,
            x_field: "DateStamp".to_string(),
            y_field: "EnvironmentalImpact".to_string(),
            series_field: Some("ElectricityType".to_string()),
            x_label: "Date".to_string(),
            y_label: format!("{} per {}", category.unit, category.per_unit),
        }
    }

    /// Count of data points per region.
    pub fn availability() -> Self {
        Self {
            title: "Data availability".to_string(),
            chart: ChartKind::Bar,
            x_field: "RegionCode".to_string(),
            y_field: "CountDataPoints".to_string(),
            series_field: None,
            x_label: "Region".to_string(),
            y_label: "Data points".to_string(),
        }
    }

    pub fn with_chart(mut self, chart: ChartKind) -> Self {
        self.chart = chart;
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_label_combines_unit_and_basis() {
        let category = ImpactCategory {
            id: 4,
            name: "Acidification".to_string(),
            unit: "mol H+ eq".to_string(),
            per_unit: "kWh".to_string(),
        };
        let config = PageConfig::impact(&category);
        assert_eq!(config.title, "Acidification");
        assert_eq!(config.y_label, "mol H+ eq per kWh");
        assert_eq!(config.chart, ChartKind::Bar);
    }

    #[test]
    fn config_serializes_for_chart_scripts() {
        let json: serde_json::Value =
            serde_json::from_str(&PageConfig::generation().with_chart(ChartKind::Line).to_json())
                .unwrap();
        assert_eq!(json["chart"], "line");
        assert_eq!(json["xField"], "DateStamp");
        assert_eq!(json["seriesField"], "ElectricityType");
    }

    #[test]
    fn availability_has_no_series() {
        let config = PageConfig::availability();
        assert_eq!(config.series_field, None);
        assert_eq!(config.x_label, "Region");
    }
}
