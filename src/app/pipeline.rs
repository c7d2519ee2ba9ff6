//! The forecasting pipeline.
//!
//! decode -> validate -> fit -> evaluate -> forecast -> classify -> compose
//!
//! Each run is a pure function from input text to a `ResultEnvelope`; nothing
//! is shared between runs.

use std::panic::{AssertUnwindSafe, catch_unwind};

use anyhow::anyhow;
use tracing::{debug, error, warn};

use crate::domain::{ResultEnvelope, Series};
use crate::error::ForecastError;
use crate::fit::{evaluate_fit, fit_trend};
use crate::forecast::generate_forecast;
use crate::io::{InputSource, load_series, read_input};
use crate::report::{compose_failure, compose_success};

/// Outcome of a single run: the envelope plus the process status it implies.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub envelope: ResultEnvelope,
    pub exit_code: u8,
}

impl RunOutput {
    fn from_result(result: Result<ResultEnvelope, ForecastError>) -> Self {
        match result {
            Ok(envelope) => Self {
                envelope,
                exit_code: 0,
            },
            Err(err) => {
                if err.is_validation() {
                    debug!(error = %err, "input rejected");
                } else {
                    error!(error = ?err, "forecast failed unexpectedly");
                }
                Self {
                    envelope: compose_failure(&err),
                    exit_code: err.exit_code(),
                }
            }
        }
    }
}

/// Read input from `source` and run the pipeline on it.
pub fn run_from_source(source: &InputSource) -> RunOutput {
    debug!(source = %source.describe(), "reading input");
    RunOutput::from_result(read_input(source).and_then(|text| forecast(&text)))
}

/// Run the pipeline on already-acquired input text.
pub fn run_from_text(text: &str) -> RunOutput {
    RunOutput::from_result(forecast(text))
}

/// Validate the input, then fit and project.
///
/// Validation failures return before any fitting work starts.
pub fn forecast(text: &str) -> Result<ResultEnvelope, ForecastError> {
    let series = load_series(text)?;
    debug!(records = series.len(), "validated series");

    catch_unwind(AssertUnwindSafe(|| fit_and_project(&series)))
        .unwrap_or_else(|payload| Err(anyhow!("panic during forecast: {}", panic_message(&*payload)).into()))
}

fn fit_and_project(series: &Series) -> Result<ResultEnvelope, ForecastError> {
    let model = fit_trend(series)?;
    let quality = evaluate_fit(series, &model)?;
    let projected = generate_forecast(&model, series.max_date())?;

    let envelope = compose_success(series, &model, &quality, &projected);
    if let ResultEnvelope::Success { warning: Some(w), .. } = &envelope {
        warn!(r_squared = quality.r_squared, "{w}");
    }
    Ok(envelope)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
