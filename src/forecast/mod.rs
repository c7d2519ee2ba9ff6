//! Forecast generation and confidence labelling.

pub mod confidence;
pub mod generator;

pub use confidence::*;
pub use generator::*;
