//! Color parsing errors.

use thiserror::Error;

/// Why an input could not be turned into concrete color channels.
///
/// Every variant carries the rejected literal so callers can report it.
/// Parsing is deterministic, so retrying the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matched none of the recognized notations.
    #[error("Unsupported color format: {0}")]
    UnsupportedFormat(String),

    /// A functional notation did not contain the expected count of numbers,
    /// or one of its arguments was not a number.
    #[error("Missing numeric component in color: {0}")]
    MissingNumericComponent(String),

    /// A `var()` reference was used where concrete channels are required.
    #[error("Custom property reference has no concrete channels: {0}")]
    DeferredReference(String),
}

impl ColorError {
    /// The literal that caused the error.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::UnsupportedFormat(s)
            | Self::MissingNumericComponent(s)
            | Self::DeferredReference(s) => s,
        }
    }
}
