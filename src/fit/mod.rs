//! Trend fitting.
//!
//! Responsibilities:
//!
//! - fit the linear time trend (`estimator`)
//! - score it against the observations (`quality`)

pub mod estimator;
pub mod quality;

pub use estimator::*;
pub use quality::*;
