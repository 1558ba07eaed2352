//! Numeric rounding helpers

/// Largest useful rounding precision: f64 carries about 15 significant
/// decimal digits, and the scale factor for anything larger overflows into
/// infinity.
pub const MAX_DECIMAL: u32 = 15;

/// Round `x` to `decimal` digits after the decimal point.
///
/// Non-finite inputs pass through unchanged. Precisions beyond
/// [`MAX_DECIMAL`] are clamped so the scale factor stays finite.
pub fn round(x: f64, decimal: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(decimal.min(MAX_DECIMAL) as i32);
    (x * factor).round() / factor
}
