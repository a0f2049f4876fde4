//! Numeric helpers.

/// Clamps `value` between `lower` and `upper`.
///
/// Unlike [`f64::clamp`] this never panics when the bounds are inverted;
/// the upper bound wins, matching `min(max(value, lower), upper)`.
/// NaN input stays NaN.
#[must_use]
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    value.max(lower).min(upper)
}
