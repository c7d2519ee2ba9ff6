//! Command-line parsing for the revenue forecaster.
//!
//! Argument parsing only; the pipeline never sees clap types.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "7-day linear revenue forecast from a JSON time series",
    long_about = "Reads a JSON array of {date, totalRevenue} records and prints a single JSON \
                  result envelope on stdout. Input comes from the INPUT argument, --file, or stdin."
)]
pub struct Cli {
    /// JSON array of records, passed inline.
    ///
    /// Taken as raw OS text so invalid UTF-8 reaches the pipeline and is
    /// reported in the envelope instead of rejected by the parser.
    #[arg(value_name = "INPUT", conflicts_with = "file", value_parser = clap::value_parser!(OsString))]
    pub input: Option<OsString>,

    /// Read the JSON array from a file instead.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Pretty-print the output envelope.
    #[arg(long, env = "FORECAST_PRETTY")]
    pub pretty: bool,

    /// Tracing filter for diagnostics on stderr (e.g. `debug`, `revenue_forecast=trace`).
    #[arg(long, env = "FORECAST_LOG", default_value = "warn")]
    pub log_level: String,
}
