//! CSS custom-property generation for the tinct color engine.
//!
//! # Scope
//!
//! This crate provides:
//! - **CSS value helpers** - recognizing `var()`/`calc()` values and
//!   normalizing bare numbers into dimensions
//! - **Surface colors** - a single color or per-face colors with an `all`
//!   fallback
//! - **Box style variables** - the `--wx`/`--wy`/`--wz` dimensions and
//!   surface colors of a box, in either the flat or the shaded layout
//! - **Style variable maps** - ordered `--name → value` pairs ready to be
//!   written as inline style declarations

/// Box dimension and surface color variable generation.
pub mod box_vars;
/// Error types for style generation.
pub mod error;
/// Surface color inputs.
pub mod surface;
/// CSS value helpers per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;
/// Ordered custom-property maps.
pub mod vars;

// Re-exports for convenience
pub use box_vars::{BoxDimensions, BoxProps, BoxSize, ShadeOffsets, StyleConfig, StyleStrategy, box_style_vars};
pub use error::StyleError;
pub use surface::{SideColors, Surface, SurfaceColors};
pub use values::{CssValue, is_calc_expression, is_css_variable, normalize_css_value};
pub use vars::StyleVars;
