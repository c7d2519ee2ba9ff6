//! Result envelope: composition and JSON shape.
//!
//! Success:
//!
//! ```text
//! { "success": true, "data": { ... }, "warning"?: "..." }
//! ```
//!
//! Failure:
//!
//! ```text
//! { "success": false, "error": "...", "details"?: "...", "trace"?: "..." }
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{
    FitQuality, ForecastOutput, ForecastPoint, InputSummary, ModelMetrics, ResultEnvelope, Series, TrendModel,
};
use crate::error::ForecastError;
use crate::forecast::{ProjectedPoint, classify_fit, low_accuracy_warning};
use crate::math::round_to;

const REVENUE_DECIMALS: i32 = 2;
const R_SQUARED_DECIMALS: i32 = 3;
const INTERCEPT_DECIMALS: i32 = 2;
const COEFFICIENT_DECIMALS: i32 = 6;

/// Assemble the success envelope.
///
/// Low confidence only adds a `warning`; the forecast is always returned.
pub fn compose_success(
    series: &Series,
    model: &TrendModel,
    quality: &FitQuality,
    projected: &[ProjectedPoint],
) -> ResultEnvelope {
    let confidence = classify_fit(quality);

    let forecast = projected
        .iter()
        .map(|p| ForecastPoint {
            date: p.date,
            predicted_revenue: round_to(p.revenue, REVENUE_DECIMALS),
            confidence,
        })
        .collect();

    let data = ForecastOutput {
        forecast,
        model_metrics: ModelMetrics {
            r_squared: round_to(quality.r_squared, R_SQUARED_DECIMALS),
            intercept: round_to(model.intercept, INTERCEPT_DECIMALS),
            coefficient: round_to(model.slope, COEFFICIENT_DECIMALS),
        },
        input_summary: InputSummary {
            date_range: series.date_range(),
            data_points: series.len(),
        },
    };

    ResultEnvelope::Success {
        data,
        warning: low_accuracy_warning(quality),
    }
}

/// Assemble the failure envelope for any pipeline error.
///
/// Only unexpected failures carry `details` and `trace`.
pub fn compose_failure(err: &ForecastError) -> ResultEnvelope {
    match err {
        ForecastError::Unexpected(inner) => ResultEnvelope::Failure {
            error: err.to_string(),
            details: Some(format!("{inner:#}")),
            trace: Some(format!("{inner:?}")),
        },
        _ => ResultEnvelope::Failure {
            error: err.to_string(),
            details: None,
            trace: None,
        },
    }
}

impl Serialize for ResultEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            ResultEnvelope::Success { data, warning } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
                if let Some(w) = warning {
                    map.serialize_entry("warning", w)?;
                }
            }
            ResultEnvelope::Failure { error, details, trace } => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                if let Some(d) = details {
                    map.serialize_entry("details", d)?;
                }
                if let Some(t) = trace {
                    map.serialize_entry("trace", t)?;
                }
            }
        }
        map.end()
    }
}

/// Render the envelope as a single JSON document.
pub fn render_json(envelope: &ResultEnvelope, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    }
}
