//! Ordered custom-property maps.
//!
//! [CSS Custom Properties § 2](https://www.w3.org/TR/css-variables-1/#defining-variables)
//!
//! "A custom property is any property whose name starts with two dashes
//! (U+002D HYPHEN-MINUS), like --foo."

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::StyleError;

/// `--name → value` pairs in insertion order.
///
/// Values are opaque: consumers write them out verbatim as inline style
/// declarations. Serializes as a JSON object in the same order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct StyleVars {
    entries: IndexMap<String, String>,
}

impl StyleVars {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom property. Re-setting a name replaces its value in place.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidPropertyName`] unless `name` starts with
    /// `--` and has at least one more character.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), StyleError> {
        let name = name.into();
        if name.len() <= 2 || !name.starts_with("--") {
            return Err(StyleError::InvalidPropertyName(name));
        }
        let _ = self.entries.insert(name, value.into());
        Ok(())
    }

    /// The value of `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Property names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as the body of a `style` attribute: `--a: 1px; --b: red`.
    #[must_use]
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// Declaration order is part of the value, so equality is order-sensitive
// (unlike `IndexMap`'s own).
impl PartialEq for StyleVars {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StyleVars {}

impl fmt::Display for StyleVars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_inline_style())
    }
}
