//! Color normalization, conversion, and serialization for CSS color values.
//!
//! # Scope
//!
//! This crate implements:
//! - **Named-Color Table** ([§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors))
//!   - All 148 keywords plus `transparent`, case-insensitive
//!
//! - **Color Parser**
//!   - Packed `0xRRGGBBAA` integers
//!   - Hex notation `#rgb`, `#rrggbb`, `#rrggbbaa`
//!     ([§ 5.2](https://www.w3.org/TR/css-color-4/#hex-notation))
//!   - `rgb()`/`rgba()` and `hsl()`/`hsla()` in both the legacy comma syntax
//!     and the modern space syntax with `/ <alpha>`
//!   - `var(--name)` references, passed through unresolved
//!
//! - **Color-Space Converter** ([§ 7.1 Converting HSL colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb))
//!   - RGB → HSL and HSL → RGB
//!
//! - **Color Serializer**
//!   - Packed integers, `#rrggbbaa` hex strings, `hsla(h, s%, l%, a)` strings
//!
//! Every operation is a pure function over plain values; the only shared
//! state is the read-only named-color table.
//!
//! # Not Yet Implemented
//!
//! - `hwb()`, `lab()`, `lch()`, `oklab()`, `oklch()`, `color()`
//! - `#rgba` four-digit hex; hex literals longer than `#rrggbbaa` are
//!   rejected rather than truncated
//! - Resolving `var()` references (the styling engine does that)

/// Lightness adjustment over HSLA values.
pub mod adjust;
/// RGB ↔ HSL conversion.
pub mod convert;
/// Error types for parsing.
pub mod error;
/// The named-color keyword table.
pub mod named;
/// Resolving [`Color`] inputs to [`ParsedColor`].
pub mod parse;
/// Rendering colors to packed integers and CSS strings.
pub mod serialize;
/// Classification of raw inputs into tagged color tokens.
pub mod token;
/// Core value types.
pub mod value;

// Re-exports for convenience
pub use adjust::{adjust_lightness, darken, lighten};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::ColorError;
pub use named::lookup;
pub use parse::{parse, parse_str};
pub use serialize::{
    OutputEncoding, serialize, serialize_hsla, to_hex_string, to_hsla_string, to_packed_int,
};
pub use token::{ColorFunction, ColorToken};
pub use value::{Color, Hsla, PackedColor, ParsedColor, Rgba};
