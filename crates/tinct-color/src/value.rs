//! Color value types.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A color packed into 32 bits as `0xRRGGBBAA`.
pub type PackedColor = u32;

/// [§ 5 sRGB Colors](https://www.w3.org/TR/css-color-4/#numeric-srgb)
///
/// The canonical representation every parsed input converges to.
///
/// Channels are kept as `f64` so values derived from HSL keep their
/// fractional part until serialization rounds them. Parsed hex, packed and
/// named colors always hold whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// "the red color channel" (0-255)
    pub r: f64,
    /// "the green color channel" (0-255)
    pub g: f64,
    /// "the blue color channel" (0-255)
    pub b: f64,
    /// "the alpha channel" (0.0 = transparent, 1.0 = opaque)
    pub a: f64,
}

impl Rgba {
    /// Black (#000000ff)
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// White (#ffffffff)
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0, 1.0);

    /// [§ 6.2 The transparent keyword](https://www.w3.org/TR/css-color-4/#transparent-color)
    /// "transparent black"
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Build a color from its four channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xRRGGBBAA` integer.
    ///
    /// Each byte is taken independently; alpha is the low byte divided by 255.
    #[must_use]
    pub fn from_packed(value: PackedColor) -> Self {
        Self {
            r: f64::from((value >> 24) & 0xff),
            g: f64::from((value >> 16) & 0xff),
            b: f64::from((value >> 8) & 0xff),
            a: f64::from(value & 0xff) / 255.0,
        }
    }

    /// Pack into `0xRRGGBBAA`. See [`crate::serialize::to_packed_int`].
    #[must_use]
    pub fn to_packed(self) -> PackedColor {
        crate::serialize::to_packed_int(self)
    }

    /// Convert to HSLA. See [`crate::convert::rgb_to_hsl`].
    #[must_use]
    pub fn to_hsla(self) -> Hsla {
        crate::convert::rgb_to_hsl(self)
    }

    /// Render as `#rrggbbaa`. See [`crate::serialize::to_hex_string`].
    #[must_use]
    pub fn to_hex_string(self) -> String {
        crate::serialize::to_hex_string(self)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// [§ 7 HSL Colors](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// A derived view of [`Rgba`] used for hue and lightness operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue angle in degrees, [0, 360)
    pub h: f64,
    /// Saturation, [0, 100]
    pub s: f64,
    /// Lightness, [0, 100]
    pub l: f64,
    /// Alpha, [0, 1]
    pub a: f64,
}

impl Hsla {
    /// Build a color from hue, saturation, lightness and alpha.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Convert to RGBA. See [`crate::convert::hsl_to_rgb`].
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        crate::convert::hsl_to_rgb(self)
    }

    /// Raise lightness by `amount`. See [`crate::adjust::lighten`].
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        crate::adjust::lighten(self, amount)
    }

    /// Lower lightness by `amount`. See [`crate::adjust::darken`].
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        crate::adjust::darken(self, amount)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize::to_hsla_string(*self))
    }
}

/// A color as supplied by a caller: either a packed integer or any CSS
/// color string.
///
/// Deserializes from a JSON number or string, so configuration files can
/// write `4278190335`, `"#ff0000"`, `"rebeccapurple"` or `"var(--brand)"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// `0xRRGGBBAA`
    Packed(PackedColor),
    /// Hex, functional, named, or `var()` text
    Css(String),
}

impl Color {
    /// Resolve this input. See [`crate::parse::parse`].
    ///
    /// # Errors
    ///
    /// Fails with [`ColorError::UnsupportedFormat`] or
    /// [`ColorError::MissingNumericComponent`] when the input is not a
    /// recognized color.
    pub fn parse(&self) -> Result<ParsedColor, ColorError> {
        crate::parse::parse(self)
    }
}

impl From<PackedColor> for Color {
    fn from(value: PackedColor) -> Self {
        Self::Packed(value)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Packed(v) => write!(f, "0x{v:08x}"),
            Self::Css(s) => f.write_str(s),
        }
    }
}

/// The result of parsing a [`Color`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParsedColor {
    /// Concrete channels.
    Rgba(Rgba),
    /// [CSS Custom Properties § 3](https://www.w3.org/TR/css-variables-1/#using-variables)
    ///
    /// A `var()` reference, kept verbatim for the styling engine to resolve.
    Deferred(String),
}

impl ParsedColor {
    /// The concrete channels, if this is not a deferred reference.
    #[must_use]
    pub const fn as_rgba(&self) -> Option<Rgba> {
        match self {
            Self::Rgba(rgba) => Some(*rgba),
            Self::Deferred(_) => None,
        }
    }

    /// Whether this is an unresolved `var()` reference.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// The concrete channels, failing for deferred references.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DeferredReference`] for a `var()` reference.
    pub fn into_rgba(self) -> Result<Rgba, ColorError> {
        match self {
            Self::Rgba(rgba) => Ok(rgba),
            Self::Deferred(reference) => Err(ColorError::DeferredReference(reference)),
        }
    }
}

impl From<Rgba> for ParsedColor {
    fn from(value: Rgba) -> Self {
        Self::Rgba(value)
    }
}

impl fmt::Display for ParsedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba(rgba) => fmt::Display::fmt(rgba, f),
            Self::Deferred(reference) => f.write_str(reference),
        }
    }
}
