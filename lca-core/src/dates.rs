//! Date helpers for API date stamps and timestamps.

use crate::error::{LcaError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date format used for API date stamps and query parameters: "YYYY-MM-DD"
pub const DATESTAMP_FORMAT: &str = "%Y-%m-%d";

/// Naive timestamp layouts accepted in availability responses, tried in order
/// after RFC 3339.
const NAIVE_TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATESTAMP_FORMAT).to_string()
}

/// Parse a date stamp in "YYYY-MM-DD" format.
///
/// Empty strings are rejected like any other malformed stamp.
pub fn parse_datestamp(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATESTAMP_FORMAT)
        .map_err(|e| LcaError::DateParse(format!("{:?}: {}", s, e)))
}

/// Parse an API timestamp.
///
/// Offsets are normalized to UTC. A bare date parses as midnight.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    parse_datestamp(s)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| LcaError::DateParse(format!("unrecognized timestamp {:?}", s)))
}

/// Serde adapter for timestamp fields decoded with [`parse_timestamp`].
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}
