//! Terminal renditions of the dashboard pages.
//!
//! Each command fetches from the backend API, runs the same pipeline as the
//! dashboard and prints the resulting table as CSV on stdout. Messages that
//! replace a chart go to stderr; a calculation error fails the command.

use chrono::NaiveDate;
use lca_core::api::{ApiClient, GenerationQuery, ImpactQuery};
use lca_core::reference::ReferenceDataset;
use lca_data::availability::render_availability;
use lca_data::calendar::{picker_bounds, render_calendar};
use lca_data::{render_page, ChartKind, PageConfig, PageMessage, PageOutcome};
use serde::Serialize;
use std::io::Write;

/// Write rows as CSV with a header line.
pub fn write_csv<T: Serialize, W: Write>(rows: &[T], out: W) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Report a message in place of a table. Aborting messages become errors.
fn report(message: &PageMessage) -> anyhow::Result<()> {
    if let Some(detail) = message.detail() {
        eprintln!("{}", detail);
    }
    match message {
        PageMessage::CalculationError { .. } | PageMessage::AvailabilityUnknown => {
            anyhow::bail!("{}", message)
        }
        _ => {
            eprintln!("{}", message);
            Ok(())
        }
    }
}

fn print_outcome<T: Serialize>(outcome: PageOutcome<T>) -> anyhow::Result<()> {
    match outcome {
        PageOutcome::Message(message) => report(&message),
        PageOutcome::Chart(view) => {
            if let Some(note) = view.omitted_note() {
                eprintln!("{}", note);
            }
            write_csv(&view.rows, std::io::stdout().lock())
        }
    }
}

/// `DE - Germany` when the reference tables know the region, else the code.
fn region_label(reference: &ReferenceDataset, code: &str) -> String {
    match reference.region(code) {
        Some(r) if !r.name.is_empty() => format!("{} - {}", r.code, r.name),
        Some(_) => code.to_string(),
        None => {
            log::warn!("region {} is not in the reference tables", code);
            code.to_string()
        }
    }
}

pub async fn run_regions(api: &ApiClient) -> anyhow::Result<()> {
    match api.list_regions().await {
        Ok(regions) if regions.is_empty() => report(&PageMessage::NoData),
        Ok(regions) => write_csv(&regions, std::io::stdout().lock()),
        Err(e) => report(&PageMessage::from_error(&e)),
    }
}

pub async fn run_availability(api: &ApiClient) -> anyhow::Result<()> {
    match render_availability(api.available_data_region().await) {
        Ok(summary) => {
            if let Some(span) = summary.span_text() {
                eprintln!("{}", span);
            }
            write_csv(&summary.bars, std::io::stdout().lock())
        }
        Err(message) => report(&message),
    }
}

pub async fn run_calendar(api: &ApiClient, region: &str) -> anyhow::Result<()> {
    match render_calendar(region, api.datapoints_count_by_day(region).await, None) {
        Ok(view) => write_csv(&view.cells, std::io::stdout().lock()),
        Err(message) => report(&message),
    }
}

pub async fn run_generation(
    api: &ApiClient,
    reference: &ReferenceDataset,
    region: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> anyhow::Result<()> {
    eprintln!("# {}", region_label(reference, region));
    // Same bounds check the dashboard uses before showing the date pickers
    let bounds = match picker_bounds(region, api.datapoints_count_by_day(region).await) {
        Ok(bounds) => bounds,
        Err(message) => return report(&message),
    };
    if !bounds.contains(start) {
        log::warn!(
            "start date {} is outside the data range {}..{} for {}",
            start,
            bounds.earliest,
            bounds.latest,
            region
        );
    }
    let query = GenerationQuery {
        region_code: region.to_string(),
        date_start: start,
        date_end: end,
    };
    let config = PageConfig::generation().with_chart(ChartKind::Line);
    print_outcome(render_page(&config, api.generation(&query).await, reference))
}

/// Impact for one category, or for every category in turn when `category`
/// is `None`. The first calculation error stops the run.
pub async fn run_impact(
    api: &ApiClient,
    reference: &ReferenceDataset,
    region: &str,
    start: NaiveDate,
    category: Option<i32>,
) -> anyhow::Result<()> {
    let categories: Vec<_> = match category {
        Some(id) => match reference.impact_category(id) {
            Some(c) => vec![c.clone()],
            None => anyhow::bail!("unknown impact category {}", id),
        },
        None => reference.impact_categories.clone(),
    };
    eprintln!("# {}", region_label(reference, region));
    for category in categories {
        eprintln!("# {} ({})", category.name, PageConfig::impact(&category).y_label);
        let query = ImpactQuery {
            region_code: region.to_string(),
            date_start: start,
            impact_category_id: category.id,
        };
        let outcome = render_page(
            &PageConfig::impact(&category),
            api.calculate(&query).await,
            reference,
        );
        print_outcome(outcome)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lca_core::reference::Region;
    use lca_data::join::GenerationRow;

    #[test]
    fn csv_has_display_columns() {
        let rows = vec![GenerationRow {
            date_stamp: "2024-01-01".to_string(),
            generation_type_id: 1,
            aggregated_generation: 12.5,
            electricity_type: "Solar".to_string(),
            category: None,
        }];
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("DateStamp,GenerationTypeId,AggregatedGeneration,ElectricityType,Category")
        );
        assert_eq!(lines.next(), Some("2024-01-01,1,12.5,Solar,"));
    }

    #[test]
    fn region_label_uses_reference_name() {
        let reference = ReferenceDataset {
            generation_types: Vec::new(),
            generation_type_mappings: Vec::new(),
            regions: vec![
                Region {
                    id: 1,
                    code: "DE".to_string(),
                    name: "Germany".to_string(),
                    external_source_available: true,
                },
                Region {
                    id: 2,
                    code: "AT".to_string(),
                    name: String::new(),
                    external_source_available: false,
                },
            ],
            impact_categories: Vec::new(),
            retrieved_at: Utc::now(),
        };
        assert_eq!(region_label(&reference, "DE"), "DE - Germany");
        assert_eq!(region_label(&reference, "AT"), "AT");
        assert_eq!(region_label(&reference, "XX"), "XX");
    }

    #[test]
    fn only_aborting_messages_fail() {
        assert!(report(&PageMessage::NoData).is_ok());
        assert!(report(&PageMessage::NoDataForRegion("DE".to_string())).is_ok());
        assert!(report(&PageMessage::CalculationError { detail: None }).is_err());
        assert!(report(&PageMessage::AvailabilityUnknown).is_err());
    }
}
