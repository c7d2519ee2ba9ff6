//! Linear trend estimation: revenue regressed on time.
//!
//! The time axis is seconds since the epoch, which puts every observation
//! around 1.7e9. We centre the axis before solving and shift the intercept
//! back afterwards, so the reported model is still
//! `revenue = intercept + slope * timestamp`.

use anyhow::anyhow;
use tracing::debug;

use crate::domain::{Series, TrendModel};
use crate::error::ForecastError;
use crate::math::fit_line;

/// Fit an ordinary least squares line through the series.
///
/// A single observation has no slope to estimate: the model is the flat line
/// through that value.
pub fn fit_trend(series: &Series) -> Result<TrendModel, ForecastError> {
    let times = series.timestamps();
    let revenues = series.revenues();

    if let [only] = revenues.as_slice() {
        debug!(value = *only, "single observation, flat trend");
        return Ok(TrendModel {
            intercept: *only,
            slope: 0.0,
        });
    }

    let t_mean = times.iter().sum::<f64>() / times.len() as f64;
    let centred: Vec<f64> = times.iter().map(|t| t - t_mean).collect();

    let (b0, slope) = fit_line(&centred, &revenues)
        .ok_or_else(|| anyhow!("least squares solve failed for {} observations", times.len()))?;
    let intercept = b0 - slope * t_mean;

    if !(intercept.is_finite() && slope.is_finite()) {
        return Err(anyhow!("non-finite trend coefficients (intercept={intercept}, slope={slope})").into());
    }

    debug!(intercept, slope, n = times.len(), "fitted trend");
    Ok(TrendModel { intercept, slope })
}
