//! Goodness of fit (coefficient of determination).

use anyhow::anyhow;

use crate::domain::{FitQuality, Series, TrendModel};
use crate::error::ForecastError;

/// Compute `R² = 1 - SS_res / SS_tot` against the observed revenues.
///
/// - one observation: R² is undefined and reported as `0.0`
/// - several observations with identical revenue: the flat model is exact, `1.0`
pub fn evaluate_fit(series: &Series, model: &TrendModel) -> Result<FitQuality, ForecastError> {
    let records = series.records();
    if records.len() == 1 {
        return Ok(FitQuality { r_squared: 0.0 });
    }

    let first = records[0].total_revenue;
    if records.iter().all(|r| r.total_revenue == first) {
        return Ok(FitQuality { r_squared: 1.0 });
    }

    let n = records.len() as f64;
    let mean = records.iter().map(|r| r.total_revenue).sum::<f64>() / n;

    let (ss_res, ss_tot) = records.iter().fold((0.0, 0.0), |(res, tot), r| {
        let fitted = model.predict(r.timestamp());
        let e = r.total_revenue - fitted;
        let d = r.total_revenue - mean;
        (res + e * e, tot + d * d)
    });

    let r_squared = 1.0 - ss_res / ss_tot;
    if !r_squared.is_finite() {
        return Err(anyhow!("non-finite R² (ss_res={ss_res}, ss_tot={ss_tot})").into());
    }

    Ok(FitQuality { r_squared })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeSeriesRecord;
    use crate::fit::fit_trend;
    use chrono::{Days, NaiveDate};

    fn series(values: &[f64]) -> Series {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = values
            .iter()
            .enumerate()
            .map(|(i, &v)| TimeSeriesRecord {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                total_revenue: v,
            })
            .collect();
        Series::new(records).unwrap()
    }

    #[test]
    fn perfectly_linear_series_scores_one() {
        let values: Vec<f64> = (0..30).map(|i| 100.0 + 10.0 * i as f64).collect();
        let s = series(&values);
        let q = evaluate_fit(&s, &fit_trend(&s).unwrap()).unwrap();
        assert!((q.r_squared - 1.0).abs() < 1e-9, "{}", q.r_squared);
    }

    #[test]
    fn constant_series_scores_one() {
        let s = series(&[0.1, 0.1, 0.1, 0.1]);
        let q = evaluate_fit(&s, &fit_trend(&s).unwrap()).unwrap();
        assert_eq!(q.r_squared, 1.0);
    }

    #[test]
    fn single_point_scores_zero() {
        let s = series(&[50.0]);
        let q = evaluate_fit(&s, &fit_trend(&s).unwrap()).unwrap();
        assert_eq!(q.r_squared, 0.0);
    }

    #[test]
    fn zigzag_has_poor_fit() {
        let s = series(&[10.0, 100.0, 10.0, 100.0, 10.0, 100.0]);
        let q = evaluate_fit(&s, &fit_trend(&s).unwrap()).unwrap();
        assert!(q.r_squared < 0.5, "{}", q.r_squared);
        assert!(q.r_squared > -1e-9);
    }

    #[test]
    fn a_bad_model_can_go_negative() {
        let s = series(&[1.0, 2.0, 3.0]);
        let wrong = TrendModel { intercept: 1_000.0, slope: 0.0 };
        let q = evaluate_fit(&s, &wrong).unwrap();
        assert!(q.r_squared < 0.0);
    }
}
