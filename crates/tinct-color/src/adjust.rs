//! Lightness adjustment.
//!
//! Pure functions: each returns a new [`Hsla`] and leaves the input alone.

use tinct_common::clamp;

use crate::value::Hsla;

/// Offset lightness by `delta` percentage points, clamped to [0, 100].
///
/// A NaN lightness stays NaN.
#[must_use]
pub fn adjust_lightness(color: Hsla, delta: f64) -> Hsla {
    Hsla {
        l: clamp(color.l + delta, 0.0, 100.0),
        ..color
    }
}

/// Raise lightness by `amount` percentage points, capped at 100.
#[must_use]
pub fn lighten(color: Hsla, amount: f64) -> Hsla {
    adjust_lightness(color, amount)
}

/// Lower lightness by `amount` percentage points, floored at 0.
#[must_use]
pub fn darken(color: Hsla, amount: f64) -> Hsla {
    adjust_lightness(color, -amount)
}
