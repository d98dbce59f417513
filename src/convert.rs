//! Opacity to alpha quantization.

/// Largest alpha channel value.
pub const MAX_ALPHA: u8 = u8::MAX;

/// Convert a fractional opacity into an 8-bit alpha value.
///
/// The opacity is clamped to `[0.0, 1.0]`, scaled by 255 and rounded half to
/// even, so `0.9` (229.5) becomes 230 and `0.3` (76.5) becomes 76.
///
/// Non-finite input never panics: positive infinity clamps to 255, negative
/// infinity clamps to 0 and NaN is treated as fully transparent (0). Long
/// digit strings that overflow `f64` parse to infinity, so the first case is
/// reachable from source text.
pub fn opacity_to_alpha(opacity: f64) -> u8 {
    if opacity.is_nan() {
        return 0;
    }
    let scaled = (opacity.clamp(0.0, 1.0) * f64::from(MAX_ALPHA)).round_ties_even();
    // scaled is an integer in [0, 255] at this point
    scaled as u8
}
