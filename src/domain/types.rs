//! Shared domain types.
//!
//! Everything here lives for a single run: decoded from the input, consumed by
//! the fit and forecast stages, and finally serialized into the envelope.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One observation: a calendar date and the revenue booked on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesRecord {
    pub date: NaiveDate,
    pub total_revenue: f64,
}

impl TimeSeriesRecord {
    /// Position on the numeric time axis (seconds since the Unix epoch).
    pub fn timestamp(&self) -> f64 {
        date_to_timestamp(self.date)
    }
}

/// Seconds since 1970-01-01T00:00:00Z at midnight of `date`.
pub fn date_to_timestamp(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Validated, non-empty collection of records in input order.
///
/// The fit does not depend on ordering; date lookups scan every record.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    records: Vec<TimeSeriesRecord>,
}

impl Series {
    /// Returns `None` for an empty record list.
    pub fn new(records: Vec<TimeSeriesRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self { records })
    }

    pub fn records(&self) -> &[TimeSeriesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn timestamps(&self) -> Vec<f64> {
        self.records.iter().map(TimeSeriesRecord::timestamp).collect()
    }

    pub fn revenues(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.total_revenue).collect()
    }

    /// Earliest and latest dates across all records.
    pub fn date_range(&self) -> DateRange {
        let first = self.records[0].date;
        let (start, end) = self
            .records
            .iter()
            .fold((first, first), |(lo, hi), r| (lo.min(r.date), hi.max(r.date)));
        DateRange { start, end }
    }

    pub fn max_date(&self) -> NaiveDate {
        self.date_range().end
    }
}

/// Fitted line `revenue = intercept + slope * timestamp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    pub intercept: f64,
    pub slope: f64,
}

impl TrendModel {
    pub fn predict(&self, timestamp: f64) -> f64 {
        self.intercept + self.slope * timestamp
    }

    pub fn predict_date(&self, date: NaiveDate) -> f64 {
        self.predict(date_to_timestamp(date))
    }
}

/// Goodness of fit. R² may be negative for fits worse than the mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitQuality {
    pub r_squared: f64,
}

/// Forecast trustworthiness bucket derived from R².
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_revenue: f64,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetrics {
    pub r_squared: f64,
    pub intercept: f64,
    /// Slope of the trend, in revenue per second.
    pub coefficient: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSummary {
    pub date_range: DateRange,
    pub data_points: usize,
}

/// Payload of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastOutput {
    pub forecast: Vec<ForecastPoint>,
    pub model_metrics: ModelMetrics,
    pub input_summary: InputSummary,
}

/// The single structured result of a run.
///
/// Serialized by `report::envelope` with a leading `success` flag.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEnvelope {
    Success {
        data: ForecastOutput,
        warning: Option<String>,
    },
    Failure {
        error: String,
        details: Option<String>,
        trace: Option<String>,
    },
}

impl ResultEnvelope {
    pub fn is_success(&self) -> bool {
        matches!(self, ResultEnvelope::Success { .. })
    }
}
