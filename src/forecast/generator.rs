//! Forward extrapolation of a fitted trend.

use anyhow::anyhow;
use chrono::{Days, NaiveDate};

use crate::domain::TrendModel;
use crate::error::ForecastError;

/// Number of daily points produced per forecast.
pub const FORECAST_HORIZON_DAYS: u64 = 7;

/// One projected day, before confidence labelling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub date: NaiveDate,
    /// Trend value clamped at zero.
    pub revenue: f64,
}

/// Project the trend over the `FORECAST_HORIZON_DAYS` days after `last_date`.
///
/// Pure in `(model, last_date)`: the same inputs always give the same points.
pub fn generate_forecast(model: &TrendModel, last_date: NaiveDate) -> Result<Vec<ProjectedPoint>, ForecastError> {
    (1..=FORECAST_HORIZON_DAYS)
        .map(|offset| -> Result<ProjectedPoint, ForecastError> {
            let date = last_date
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| anyhow!("forecast date overflows the calendar after {last_date}"))?;
            let raw = model.predict_date(date);
            if !raw.is_finite() {
                return Err(anyhow!("non-finite prediction for {date}").into());
            }
            Ok(ProjectedPoint {
                date,
                revenue: clamp_revenue(raw),
            })
        })
        .collect()
}

fn clamp_revenue(raw: f64) -> f64 {
    if raw > 0.0 { raw } else { 0.0 }
}
