//! Fixed-precision rounding for reported numbers.

/// Round `value` to `decimals` places, half away from zero.
///
/// Negative zero is folded into `0.0` so it serializes as `0.0`, not `-0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() { rounded + 0.0 } else { value }
}
