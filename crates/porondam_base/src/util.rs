//! Longitude wrapping shared by the converters.

/// Wrap a longitude into [0, 360].
///
/// The upper end is reachable: a negative input smaller in magnitude than
/// half an ulp of 360 rounds to exactly 360.0, so span lookups must clamp
/// their index.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
