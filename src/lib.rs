//! `revenue-forecast` library crate.
//!
//! The binary (`forecast`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable without spawning processes
//! - callers embedding the forecast get the typed envelope, not just JSON text

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod forecast;
pub mod io;
pub mod math;
pub mod report;
