//! RGB ↔ HSL conversion.
//!
//! [§ 7.1 Converting HSL colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
//! [§ 7.2 Converting sRGB colors to HSL](https://www.w3.org/TR/css-color-4/#rgb-to-hsl)
//!
//! Both directions are total. Inputs outside the nominal ranges are not
//! clamped and may produce out-of-range or NaN output.

use crate::value::{Hsla, Rgba};

/// Convert RGBA (channels 0-255) to HSLA (hue in degrees, s/l in percent).
///
/// Achromatic colors (all channels equal) get `h = s = 0`.
#[must_use]
pub fn rgb_to_hsl(color: Rgba) -> Hsla {
    let Rgba { r, g, b, a } = color;
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        return Hsla::new(0.0, 0.0, l * 100.0, a);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Which 60° sector the hue falls in depends on the dominant channel.
    let sector = if r >= g && r >= b {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if g >= b {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsla::new(normalize_hue(sector * 60.0), s * 100.0, l * 100.0, a)
}

/// Convert HSLA (hue in degrees, s/l in percent) to RGBA (channels 0-255).
///
/// The returned channels are not rounded.
#[must_use]
pub fn hsl_to_rgb(color: Hsla) -> Rgba {
    let Hsla { h, s, l, a } = color;
    let (h, s, l) = (h / 360.0, s / 100.0, l / 100.0);

    if s == 0.0 {
        let v = l * 255.0;
        return Rgba::new(v, v, v, a);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgba::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        a,
    )
}

/// The periodic triangle used for each channel, `t` in turns.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Wrap an angle into [0, 360).
#[must_use]
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_to_channel_wraps_phase() {
        let p = 0.2;
        let q = 0.8;
        assert!((hue_to_channel(p, q, 1.25) - hue_to_channel(p, q, 0.25)).abs() < 1e-12);
        assert!((hue_to_channel(p, q, -0.75) - hue_to_channel(p, q, 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_hue() {
        assert!((normalize_hue(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_hue(720.0)).abs() < 1e-12);
        assert!(normalize_hue(-1e-20) < 360.0);
    }
}
