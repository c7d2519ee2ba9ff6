//! Confidence buckets for a fitted trend.

use crate::domain::{Confidence, FitQuality};

/// R² at or above which a forecast is labelled `high`.
pub const HIGH_CONFIDENCE_R2: f64 = 0.7;

/// R² at or above which a forecast is labelled `medium`.
pub const MEDIUM_CONFIDENCE_R2: f64 = 0.5;

/// Below this R² the result carries a low-accuracy warning.
pub const LOW_ACCURACY_R2: f64 = 0.5;

/// Map R² to a label. NaN falls through to `low`.
pub fn classify(r_squared: f64) -> Confidence {
    if r_squared >= HIGH_CONFIDENCE_R2 {
        Confidence::High
    } else if r_squared >= MEDIUM_CONFIDENCE_R2 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

pub fn classify_fit(quality: &FitQuality) -> Confidence {
    classify(quality.r_squared)
}

/// Human-readable warning when the fit is too weak to trust.
pub fn low_accuracy_warning(quality: &FitQuality) -> Option<String> {
    let r2 = quality.r_squared;
    if r2 >= LOW_ACCURACY_R2 {
        return None;
    }
    Some(format!(
        "Low model accuracy (R²={r2:.2}), predictions may be unreliable"
    ))
}
