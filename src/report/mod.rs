//! Reporting: the structured result envelope written to stdout.

pub mod envelope;

pub use envelope::*;
