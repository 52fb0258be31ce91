//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use lca_core::dates::{format_date, parse_datestamp};
use lca_data::calendar::DateBounds;

/// Pull a typed-in date back inside the bounds. Unparseable input is kept
/// as is so `AppState::start`/`end` treat it as no date.
fn clamp_picked(raw: &str, bounds: &DateBounds) -> String {
    match parse_datestamp(raw) {
        Ok(date) => format_date(&bounds.clamp(date)),
        Err(_) => raw.to_string(),
    }
}

/// Start/end date inputs bounded by the selected region's first and last
/// day with data. Renders nothing until those bounds are known.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let Some(bounds) = (state.date_bounds)() else {
        return rsx! {};
    };
    let min = format_date(&bounds.earliest);
    let max = format_date(&bounds.latest);
    let start = (state.start_date)();
    let end = (state.end_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(clamp_picked(&evt.value(), &bounds));
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(clamp_picked(&evt.value(), &bounds));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Start date: "
                input {
                    r#type: "date",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "End date: "
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_end_change,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bounds() -> DateBounds {
        DateBounds {
            earliest: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            latest: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[test]
    fn out_of_range_dates_snap_to_bounds() {
        assert_eq!(clamp_picked("2023-06-01", &bounds()), "2024-01-01");
        assert_eq!(clamp_picked("2024-03-01", &bounds()), "2024-01-31");
        assert_eq!(clamp_picked("2024-01-15", &bounds()), "2024-01-15");
    }

    #[test]
    fn cleared_input_stays_empty() {
        assert_eq!(clamp_picked("", &bounds()), "");
    }
}
