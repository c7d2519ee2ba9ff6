//! Input helpers.
//!
//! - JSON decode + schema validation (`ingest`)
//! - input text acquisition from argv, a file, or stdin (`source`)

pub mod ingest;
pub mod source;

pub use ingest::*;
pub use source::*;
