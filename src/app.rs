//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up stderr logging
//! - resolves where the input comes from
//! - runs the forecast pipeline
//! - writes exactly one JSON envelope to stdout

use std::io::Write;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::AppError;
use crate::io::InputSource;

pub mod pipeline;

/// Entry point for the `forecast` binary.
///
/// Handled input problems still return `Ok(())`: the failure is in the
/// envelope, not the exit status.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let source = InputSource::resolve(cli.input, cli.file);
    let run = pipeline::run_from_source(&source);

    let json = crate::report::render_json(&run.envelope, cli.pretty)
        .map_err(|e| AppError::new(2, format!("Failed to serialize result: {e}")))?;
    write_stdout(&json)?;

    debug!(success = run.envelope.is_success(), exit_code = run.exit_code, "done");
    if run.exit_code != 0 {
        return Err(AppError::new(run.exit_code, "Forecast failed unexpectedly (see envelope)."));
    }
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the envelope.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn write_stdout(json: &str) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{json}")
        .and_then(|_| out.flush())
        .map_err(|e| AppError::new(2, format!("Failed to write result: {e}")))
}
