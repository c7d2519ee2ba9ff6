//! JSON ingest and validation.
//!
//! This module turns raw input text into a `Series` that is safe to fit.
//!
//! Design goals:
//! - **Strict schema**: every record needs `date` and `totalRevenue`
//! - **Fail the whole run** on the first bad record (no silent skipping)
//! - **Separation of concerns**: no fitting logic here

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::debug;

use crate::domain::{Series, TimeSeriesRecord};
use crate::error::ForecastError;

pub const FIELD_DATE: &str = "date";
pub const FIELD_REVENUE: &str = "totalRevenue";

const REQUIRED_FIELDS: &[&str] = &[FIELD_DATE, FIELD_REVENUE];

/// Decode and validate input text in one step.
pub fn load_series(text: &str) -> Result<Series, ForecastError> {
    let values = decode_input(text)?;
    validate_records(&values)
}

/// Decode input text as a non-empty JSON array.
pub fn decode_input(text: &str) -> Result<Vec<Value>, ForecastError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ForecastError::MalformedInput(e.to_string()))?;

    match value {
        Value::Array(items) if !items.is_empty() => {
            debug!(records = items.len(), "decoded input array");
            Ok(items)
        }
        _ => Err(ForecastError::EmptyInput),
    }
}

/// Check the schema of each decoded element and build the typed `Series`.
///
/// Missing fields are checked across every record first. Within a record the
/// date is checked before the revenue.
pub fn validate_records(values: &[Value]) -> Result<Series, ForecastError> {
    ensure_required_fields(values)?;

    let mut records = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        let obj = value
            .as_object()
            .ok_or_else(|| missing_columns_error(REQUIRED_FIELDS.iter().copied()))?;
        let date = parse_date_value(&obj[FIELD_DATE]).map_err(|raw| {
            ForecastError::DateParse(format!(
                "Invalid date format in input data: {raw} (record {idx})"
            ))
        })?;
        let total_revenue = parse_revenue(&obj[FIELD_REVENUE]).ok_or_else(|| {
            ForecastError::Schema(format!(
                "Data processing error: `{FIELD_REVENUE}` must be numeric (record {idx})"
            ))
        })?;
        records.push(TimeSeriesRecord {
            date,
            total_revenue,
        });
    }

    Series::new(records).ok_or(ForecastError::EmptyInput)
}

/// A record that is not an object lacks every required field.
fn ensure_required_fields(values: &[Value]) -> Result<(), ForecastError> {
    let missing: BTreeSet<&str> = values
        .iter()
        .flat_map(|v| {
            let obj = v.as_object();
            REQUIRED_FIELDS
                .iter()
                .filter(move |f| obj.is_none_or(|o| !o.contains_key(**f)))
        })
        .copied()
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    Err(missing_columns_error(missing.into_iter()))
}

fn missing_columns_error<'a>(names: impl Iterator<Item = &'a str>) -> ForecastError {
    let names: Vec<&str> = names.collect();
    ForecastError::Schema(format!("Missing required columns: {}", names.join(", ")))
}

/// Only JSON numbers are accepted; numeric strings are not coerced.
fn parse_revenue(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Parse a `date` field, returning the offending raw text on failure.
fn parse_date_value(value: &Value) -> Result<NaiveDate, String> {
    match value {
        Value::String(s) => parse_date(s).ok_or_else(|| format!("'{s}'")),
        other => Err(other.to_string()),
    }
}

/// Parse an unambiguous date string.
///
/// Timestamps are reduced to their calendar date. Slash forms where day and
/// month could be swapped (`01/02/2024`) are rejected.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FMTS: [&str; 6] = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%B %d, %Y",
        "%b %d, %Y",
        "%d %B %Y",
        "%d %b %Y",
    ];
    const DATETIME_FMTS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year = s[0..4].parse().ok()?;
        let month = s[4..6].parse().ok()?;
        let day = s[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    for fmt in DATE_FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}
