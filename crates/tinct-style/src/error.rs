//! Style generation errors.

use thiserror::Error;
use tinct_color::ColorError;

use crate::surface::Surface;

/// Why style variables could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A surface color did not parse.
    #[error("Invalid color for the {surface} surface: {source}")]
    Color {
        /// Which surface entry.
        surface: Surface,
        /// The parser's error.
        #[source]
        source: ColorError,
    },

    /// A face has neither its own color nor an `all` fallback.
    #[error("No color for the {0} surface and no `all` fallback")]
    MissingSurfaceColor(Surface),

    /// A face color is a `var()` reference, so it cannot be shaded.
    #[error("The {surface} surface uses {reference}, which cannot be shaded")]
    DeferredColor {
        /// Which surface entry.
        surface: Surface,
        /// The unresolved reference.
        reference: String,
    },

    /// A style variable name does not start with `--`.
    #[error("Custom property names must start with `--`: {0}")]
    InvalidPropertyName(String),
}
