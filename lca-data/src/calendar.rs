//! Daily data-point counts: date-picker bounds and the calendar heatmap.

use crate::outcome::PageMessage;
use chrono::{Datelike, NaiveDate};
use lca_core::date_range::DateRange;
use lca_core::dates::{format_date, parse_datestamp};
use lca_core::error::{LcaError, Result};
use lca_core::records::DailyCount;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sum counts per day. Fails on the first malformed date stamp.
pub fn daily_totals(counts: &[DailyCount]) -> Result<BTreeMap<NaiveDate, u64>> {
    let mut totals = BTreeMap::new();
    for count in counts {
        let date = parse_datestamp(&count.datestamp)?;
        *totals.entry(date).or_insert(0) += count.count;
    }
    Ok(totals)
}

/// Earliest and latest day with data.
pub fn date_bounds(counts: &[DailyCount]) -> Result<DateRange> {
    let totals = daily_totals(counts)?;
    match (totals.keys().next(), totals.keys().next_back()) {
        (Some(first), Some(last)) => Ok(DateRange(*first, *last)),
        _ => Err(LcaError::DateParse("no date stamps".to_string())),
    }
}

/// One day of the calendar heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub date: String,
    /// Week column, counted from the week containing the first day.
    pub week: u32,
    /// Row within the week, Monday = 0.
    pub weekday: u32,
    pub count: u64,
}

/// Lay out `range` as a week-by-weekday grid. Days without counts get zero.
pub fn heatmap(counts: &[DailyCount], range: DateRange) -> Result<Vec<HeatmapCell>> {
    let totals = daily_totals(counts)?;
    let first_monday = range.0 - chrono::Duration::days(range.0.weekday().num_days_from_monday() as i64);
    Ok(range
        .map(|date| HeatmapCell {
            date: format_date(&date),
            week: ((date - first_monday).num_days() / 7) as u32,
            weekday: date.weekday().num_days_from_monday(),
            count: totals.get(&date).copied().unwrap_or(0),
        })
        .collect())
}

/// Calendar section for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub region_code: String,
    pub counts: Vec<DailyCount>,
    pub cells: Vec<HeatmapCell>,
    pub max_count: u64,
}

impl CalendarView {
    pub fn cells_json(&self) -> String {
        serde_json::to_string(&self.cells).unwrap_or_default()
    }

    pub fn counts_json(&self) -> String {
        serde_json::to_string(&self.counts).unwrap_or_default()
    }
}

fn fetch_failure(region_code: &str, err: &LcaError) -> PageMessage {
    if err.is_upstream() {
        PageMessage::from_error(err)
    } else {
        PageMessage::TryDifferentRegion(region_code.to_string())
    }
}

/// Build the calendar heatmap for a region.
///
/// `span` is the overall availability span; without it the heatmap covers
/// the region's own first to last day.
pub fn render_calendar(
    region_code: &str,
    fetched: std::result::Result<Vec<DailyCount>, LcaError>,
    span: Option<DateRange>,
) -> std::result::Result<CalendarView, PageMessage> {
    let counts = fetched.map_err(|e| fetch_failure(region_code, &e))?;
    if counts.is_empty() {
        return Err(PageMessage::NoDataForRegion(region_code.to_string()));
    }
    let try_other = |e: LcaError| {
        log::warn!("calendar for {}: {}", region_code, e);
        PageMessage::TryDifferentRegion(region_code.to_string())
    };
    let range = match span {
        Some(range) => range,
        None => date_bounds(&counts).map_err(try_other)?,
    };
    let cells = heatmap(&counts, range).map_err(try_other)?;
    let max_count = cells.iter().map(|c| c.count).max().unwrap_or(0);
    Ok(CalendarView {
        region_code: region_code.to_string(),
        counts,
        cells,
        max_count,
    })
}

/// Bounds for the start/end date pickers of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateBounds {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateBounds {
    /// Clamp a picked date into the bounds.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.earliest, self.latest)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.earliest <= date && date <= self.latest
    }
}

/// Date-picker bounds for a region.
///
/// An empty response yields `No data for region <code>`; a response whose
/// stamps do not parse yields the try-another-region hint. Either way no
/// date picker should be shown.
pub fn picker_bounds(
    region_code: &str,
    fetched: std::result::Result<Vec<DailyCount>, LcaError>,
) -> std::result::Result<DateBounds, PageMessage> {
    let counts = fetched.map_err(|e| fetch_failure(region_code, &e))?;
    if counts.is_empty() {
        return Err(PageMessage::NoDataForRegion(region_code.to_string()));
    }
    let range = date_bounds(&counts).map_err(|e| {
        log::warn!("date bounds for {}: {}", region_code, e);
        PageMessage::TryDifferentRegion(region_code.to_string())
    })?;
    Ok(DateBounds {
        earliest: range.0,
        latest: range.1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lca_core::records::decode_records;

    fn count(date: &str, n: u64) -> DailyCount {
        DailyCount {
            datestamp: date.to_string(),
            count: n,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn totals_sum_duplicate_days() {
        let totals =
            daily_totals(&[count("2024-01-02", 3), count("2024-01-01", 1), count("2024-01-02", 4)])
                .unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&day(2024, 1, 2)], 7);
    }

    #[test]
    fn bounds_from_unordered_counts() {
        let range = date_bounds(&[count("2024-03-05", 1), count("2024-01-01", 1)]).unwrap();
        assert_eq!(range, DateRange(day(2024, 1, 1), day(2024, 3, 5)));
    }

    #[test]
    fn heatmap_fills_missing_days_with_zero() {
        // 2024-01-01 is a Monday.
        let cells = heatmap(
            &[count("2024-01-01", 24), count("2024-01-09", 12)],
            DateRange(day(2024, 1, 1), day(2024, 1, 10)),
        )
        .unwrap();
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0].count, 24);
        assert_eq!(cells[1].count, 0);
        assert_eq!(cells[8].date, "2024-01-09");
        assert_eq!(cells[8].count, 12);
        assert_eq!((cells[8].week, cells[8].weekday), (1, 1));
    }

    #[test]
    fn heatmap_week_starts_on_monday() {
        // 2024-01-03 is a Wednesday.
        let cells = heatmap(&[], DateRange(day(2024, 1, 3), day(2024, 1, 8))).unwrap();
        assert_eq!(cells[0].weekday, 2);
        assert_eq!(cells[0].week, 0);
        assert_eq!(cells[5].weekday, 0);
        assert_eq!(cells[5].week, 1);
    }

    #[test]
    fn empty_counts_mean_no_data_for_region() {
        let err = picker_bounds("DE", Ok(Vec::new())).unwrap_err();
        assert_eq!(err.to_string(), "No data for region DE");
        let err = render_calendar("DE", Ok(Vec::new()), None).unwrap_err();
        assert_eq!(err.to_string(), "No data for region DE");
    }

    #[test]
    fn malformed_stamps_suggest_another_region() {
        let err = picker_bounds("PL", Ok(vec![count("", 3)])).unwrap_err();
        assert_eq!(err, PageMessage::TryDifferentRegion("PL".to_string()));
        let err = render_calendar("PL", Ok(vec![count("01/02/2024", 3)]), None).unwrap_err();
        assert_eq!(err.to_string(), "No data for PL, try a different region code");
    }

    #[test]
    fn undecodable_body_suggests_another_region() {
        let body = r#"{"detail":"x"}"#;
        let fetched = || decode_records::<DailyCount>("/datapoints_count_by_day", body);
        assert!(fetched().is_err());

        let err = picker_bounds("PL", fetched()).unwrap_err();
        assert_eq!(err.to_string(), "No data for PL, try a different region code");
        let err = render_calendar("PL", fetched(), None).unwrap_err();
        assert_eq!(err, PageMessage::TryDifferentRegion("PL".to_string()));
    }

    #[test]
    fn picker_bounds_clamp() {
        let bounds = picker_bounds(
            "DE",
            Ok(vec![count("2024-01-01", 1), count("2024-01-07", 1)]),
        )
        .unwrap();
        assert_eq!(bounds.earliest, day(2024, 1, 1));
        assert_eq!(bounds.clamp(day(2023, 12, 1)), day(2024, 1, 1));
        assert_eq!(bounds.clamp(day(2024, 2, 1)), day(2024, 1, 7));
        assert!(bounds.contains(day(2024, 1, 3)));
    }

    #[test]
    fn calendar_uses_availability_span() {
        let view = render_calendar(
            "DE",
            Ok(vec![count("2024-01-02", 5)]),
            Some(DateRange(day(2024, 1, 1), day(2024, 1, 31))),
        )
        .unwrap();
        assert_eq!(view.cells.len(), 31);
        assert_eq!(view.max_count, 5);
    }

    #[test]
    fn upstream_failure_is_calculation_error() {
        let err = LcaError::Status {
            endpoint: "/datapoints_count_by_day".to_string(),
            status: 500,
            body: String::new(),
        };
        let message = picker_bounds("DE", Err(err)).unwrap_err();
        assert_eq!(message.to_string(), "Calculation Error");
    }
}
