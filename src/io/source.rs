//! Where the input text comes from.
//!
//! The pipeline itself only sees a `&str`; this is the thin layer that fetches
//! it from a CLI argument, a file, or standard input. Bytes are read raw and
//! decoded here, so text that is not UTF-8 is reported as malformed input
//! rather than as an I/O failure.

use std::ffi::OsString;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;

use crate::error::ForecastError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// JSON passed directly on the command line.
    Inline(OsString),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Argument beats file beats stdin.
    pub fn resolve(inline: Option<OsString>, file: Option<PathBuf>) -> Self {
        match (inline, file) {
            (Some(text), _) => InputSource::Inline(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Inline(_) => "argument".to_string(),
            InputSource::File(path) => format!("file '{}'", path.display()),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}

/// Read the raw input text.
///
/// An interactive terminal on stdin counts as "no input", so the binary never
/// blocks waiting for a user who did not pipe anything in.
pub fn read_input(source: &InputSource) -> Result<String, ForecastError> {
    match source {
        InputSource::Inline(text) => text
            .clone()
            .into_string()
            .map_err(|_| ForecastError::MalformedInput("argument is not valid UTF-8".to_string())),
        InputSource::File(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
            decode_utf8(bytes)
        }
        InputSource::Stdin => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(ForecastError::NoInput);
            }
            let mut bytes = Vec::new();
            stdin
                .lock()
                .read_to_end(&mut bytes)
                .context("Failed to read input from stdin")?;
            let text = decode_utf8(bytes)?;
            if text.trim().is_empty() {
                return Err(ForecastError::NoInput);
            }
            Ok(text)
        }
    }
}

fn decode_utf8(bytes: Vec<u8>) -> Result<String, ForecastError> {
    String::from_utf8(bytes)
        .map_err(|e| ForecastError::MalformedInput(format!("input is not valid UTF-8: {e}")))
}
