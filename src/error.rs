//! Error types.
//!
//! Two layers:
//!
//! - `ForecastError` is the pipeline taxonomy. Every variant ends up in the
//!   failure envelope; only `Unexpected` turns into a non-zero exit status.
//! - `AppError` is what the binary sees: an exit code plus a message for stderr.

use thiserror::Error;

/// Failures raised while turning input text into a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// No input text was supplied (no argument, no file, interactive stdin).
    #[error("No input data provided")]
    NoInput,

    /// The input text is not valid JSON.
    #[error("Invalid JSON input: {0}")]
    MalformedInput(String),

    /// The decoded value is not a non-empty array.
    #[error("Input data must be a non-empty array")]
    EmptyInput,

    /// Missing required fields or a non-numeric revenue value.
    #[error("{0}")]
    Schema(String),

    /// A `date` value could not be parsed.
    #[error("{0}")]
    DateParse(String),

    /// Anything not anticipated above (overflow, singular solve, panics).
    #[error("Unexpected error")]
    Unexpected(anyhow::Error),
}

impl ForecastError {
    /// Handled input problems are reported with a zero exit status.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ForecastError::Unexpected(_))
    }

    /// Process exit code associated with this failure.
    pub fn exit_code(&self) -> u8 {
        if self.is_validation() { 0 } else { 1 }
    }
}

impl From<anyhow::Error> for ForecastError {
    fn from(err: anyhow::Error) -> Self {
        ForecastError::Unexpected(err)
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
