//! Mathematical utilities: least squares and rounding helpers.

pub mod ols;
pub mod round;

pub use ols::*;
pub use round::*;
