//! The single renderer shared by the generation and impact pages.

use crate::join::{join, Joinable};
use crate::outcome::{chart_points, ChartView, PageMessage, PageOutcome};
use crate::page::PageConfig;
use lca_core::error::LcaError;
use lca_core::reference::ReferenceDataset;

/// Turn a fetched payload into what the page shows.
///
/// - a failed fetch becomes "Calculation Error" and the page should stop
/// - an empty payload, or one whose rows were all dropped by the join,
///   becomes "No data available" and never reaches the chart
/// - anything else is joined, relabelled and charted per `config`
pub fn render_page<R: Joinable>(
    config: &PageConfig,
    fetched: Result<Vec<R>, LcaError>,
    reference: &ReferenceDataset,
) -> PageOutcome<R::Row> {
    let records = match fetched {
        Ok(records) => records,
        Err(e) => {
            log::warn!("{}: calculation not successful: {}", config.title, e);
            return PageOutcome::Message(PageMessage::from_error(&e));
        }
    };
    if records.is_empty() {
        log::info!("{}: empty payload", config.title);
        return PageOutcome::Message(PageMessage::NoData);
    }

    let joined = join(records, reference);
    if joined.rows.is_empty() {
        return PageOutcome::Message(PageMessage::NoData);
    }

    match chart_points(&joined.rows, config) {
        Ok(points) => PageOutcome::Chart(ChartView {
            config: config.clone(),
            rows: joined.rows,
            points,
            omitted: joined.dropped,
        }),
        Err(e) => {
            log::error!("{}: rows do not match page config: {}", config.title, e);
            PageOutcome::Message(PageMessage::from_error(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reference;
    use lca_core::records::{GenerationRecord, ImpactRecord};

    fn de_week() -> Vec<GenerationRecord> {
        vec![
            GenerationRecord {
                date_stamp: "2024-01-01".to_string(),
                generation_type_id: 1,
                aggregated_generation: 1520.0,
            },
            GenerationRecord {
                date_stamp: "2024-01-01".to_string(),
                generation_type_id: 2,
                aggregated_generation: 8110.5,
            },
        ]
    }

    #[test]
    fn generation_scenario_renders_two_labelled_rows() {
        let outcome = render_page(&PageConfig::generation(), Ok(de_week()), &reference());
        let view = match outcome {
            PageOutcome::Chart(view) => view,
            other => panic!("expected chart, got {:?}", other),
        };
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.series(), vec!["Solar", "Wind"]);
        assert_eq!(view.omitted, 0);

        let table: Vec<serde_json::Value> = serde_json::from_str(&view.table_json()).unwrap();
        assert_eq!(table.len(), 2);
        for row in &table {
            let object = row.as_object().unwrap();
            assert!(object.contains_key("ElectricityType"));
            assert!(!object.contains_key("Id"));
        }
    }

    #[test]
    fn empty_payload_never_reaches_chart() {
        let outcome = render_page::<GenerationRecord>(
            &PageConfig::generation(),
            Ok(Vec::new()),
            &reference(),
        );
        assert_eq!(outcome.message(), Some(&PageMessage::NoData));

        let outcome =
            render_page::<ImpactRecord>(&PageConfig::generation(), Ok(Vec::new()), &reference());
        assert!(!outcome.is_chart());
    }

    #[test]
    fn fully_unmatched_payload_is_no_data() {
        let records = vec![GenerationRecord {
            date_stamp: "2024-01-01".to_string(),
            generation_type_id: 42,
            aggregated_generation: 1.0,
        }];
        let outcome = render_page(&PageConfig::generation(), Ok(records), &reference());
        assert_eq!(outcome.message(), Some(&PageMessage::NoData));
    }

    #[test]
    fn partially_unmatched_payload_reports_omitted_rows() {
        let mut records = de_week();
        records.push(GenerationRecord {
            date_stamp: "2024-01-02".to_string(),
            generation_type_id: 42,
            aggregated_generation: 1.0,
        });
        match render_page(&PageConfig::generation(), Ok(records), &reference()) {
            PageOutcome::Chart(view) => {
                assert_eq!(view.rows.len(), 2);
                assert_eq!(view.omitted, 1);
                assert!(view.omitted_note().is_some());
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }

    #[test]
    fn upstream_status_short_circuits() {
        let err = LcaError::Status {
            endpoint: "/generation".to_string(),
            status: 503,
            body: String::new(),
        };
        let outcome =
            render_page::<GenerationRecord>(&PageConfig::generation(), Err(err), &reference());
        assert!(outcome.aborts_page());
        assert_eq!(
            outcome.message().map(|m| m.to_string()),
            Some("Calculation Error".to_string())
        );
    }

    #[test]
    fn impact_page_uses_category_label() {
        let records = vec![ImpactRecord {
            date_stamp: "2024-01-01".to_string(),
            generation_type_id: 2,
            impact_category_id: None,
            environmental_impact: 0.011,
            impact_category_unit: "kg CO2 eq".to_string(),
            per_unit: "kWh".to_string(),
        }];
        let reference = reference();
        let config = PageConfig::impact(&reference.impact_categories[0]);
        match render_page(&config, Ok(records), &reference) {
            PageOutcome::Chart(view) => {
                assert_eq!(view.config.y_label, "kg CO2 eq per kWh");
                assert_eq!(view.points[0].series.as_deref(), Some("Wind"));
                assert!((view.points[0].y - 0.011).abs() < 1e-12);
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }
}
