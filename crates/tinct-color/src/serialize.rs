//! Color serialization.
//!
//! All encodings share one rounding policy: channels round to the nearest
//! integer, alpha rounds from [0, 1] to [0, 255]. Values that still fall
//! outside a byte after rounding are saturated, with a warning, since a
//! packed color cannot carry them.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::value::{Hsla, PackedColor, ParsedColor, Rgba};

/// How resolved colors are written out for the styling layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    /// `#rrggbbaa`
    #[default]
    Hex,
    /// The `0xRRGGBBAA` integer in decimal
    Packed,
    /// `hsla(h, s%, l%, a)`
    Hsla,
}

/// Round `value * scale` and fit it into a byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(value: f64, scale: f64, channel: &str) -> u32 {
    let rounded = (value * scale).round();
    if !(0.0..=255.0).contains(&rounded) {
        log::warn!("{channel} channel {value} does not fit in a byte, saturating");
    }
    // `as` saturates and maps NaN to 0.
    rounded.clamp(0.0, 255.0) as u32
}

/// Pack into `0xRRGGBBAA`.
#[must_use]
pub fn to_packed_int(color: Rgba) -> PackedColor {
    (to_byte(color.r, 1.0, "red") << 24)
        | (to_byte(color.g, 1.0, "green") << 16)
        | (to_byte(color.b, 1.0, "blue") << 8)
        | to_byte(color.a, 255.0, "alpha")
}

/// Render as `#rrggbbaa`: lowercase, always eight digits.
#[must_use]
pub fn to_hex_string(color: Rgba) -> String {
    format!("#{:08x}", to_packed_int(color))
}

/// Render as `hsla(h, s%, l%, a)`.
///
/// Fields are written unrounded with no padding. The output is injected
/// directly as a style value, so the format is fixed.
#[must_use]
pub fn to_hsla_string(color: Hsla) -> String {
    // Adding 0.0 turns -0.0 into 0.0.
    format!(
        "hsla({}, {}%, {}%, {})",
        color.h + 0.0,
        color.s + 0.0,
        color.l + 0.0,
        color.a + 0.0
    )
}

/// Render a parsed color with the given encoding.
///
/// Deferred `var()` references are written verbatim whatever the encoding.
#[must_use]
pub fn serialize(color: &ParsedColor, encoding: OutputEncoding) -> String {
    match color {
        ParsedColor::Deferred(reference) => reference.clone(),
        ParsedColor::Rgba(rgba) => match encoding {
            OutputEncoding::Hex => to_hex_string(*rgba),
            OutputEncoding::Packed => to_packed_int(*rgba).to_string(),
            OutputEncoding::Hsla => to_hsla_string(rgb_to_hsl(*rgba)),
        },
    }
}

/// Render an HSLA value with the given encoding.
///
/// [`OutputEncoding::Hsla`] writes the value as is; the other encodings go
/// through [`hsl_to_rgb`] first.
#[must_use]
pub fn serialize_hsla(color: Hsla, encoding: OutputEncoding) -> String {
    match encoding {
        OutputEncoding::Hsla => to_hsla_string(color),
        OutputEncoding::Hex => to_hex_string(hsl_to_rgb(color)),
        OutputEncoding::Packed => to_packed_int(hsl_to_rgb(color)).to_string(),
    }
}
