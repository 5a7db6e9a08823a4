//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn count_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Proportion of `part` within `whole`, returning 0.0 for an empty whole.
#[must_use]
pub fn proportion(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    count_to_f64(part) / count_to_f64(whole)
}

/// Round a f64 to `places` decimal places, returning 0.0 for non-finite values.
#[must_use]
pub fn round_to_places(value: f64, places: u8) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10_f64.powi(i32::from(places));
    (value * factor).round() / factor
}
