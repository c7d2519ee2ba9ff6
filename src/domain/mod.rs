//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - decoded observations (`TimeSeriesRecord`, `Series`)
//! - fit outputs (`TrendModel`, `FitQuality`)
//! - forecast and envelope shapes (`ForecastPoint`, `ForecastOutput`, `ResultEnvelope`)

pub mod types;

pub use types::*;
