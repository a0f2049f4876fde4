//! CSS value helpers.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dimension as a caller writes it: a bare number, or any CSS text
/// (`"2rem"`, `"var(--size)"`, `"calc(100% - 4px)"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A number that still needs a unit.
    Number(f64),
    /// Text used verbatim.
    Text(String),
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&normalize_css_value(self, None))
    }
}

/// [CSS Custom Properties § 3](https://www.w3.org/TR/css-variables-1/#using-variables)
///
/// Whether `value` is exactly `var(--name)`, where the name is made of word
/// characters and `-`. Fallbacks are not accepted here.
#[must_use]
pub fn is_css_variable(value: &str) -> bool {
    value
        .strip_prefix("var(--")
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|name| {
            !name.is_empty() && name.chars().all(|c| c == '-' || c == '_' || c.is_ascii_alphanumeric())
        })
}

/// [§ 10.1 Basic Arithmetic: calc()](https://www.w3.org/TR/css-values-4/#calc-func)
///
/// Whether `value` is a `calc(...)` expression. The body is not checked.
#[must_use]
pub fn is_calc_expression(value: &str) -> bool {
    value.starts_with("calc(") && value.ends_with(')')
}

/// Write a value for a style declaration.
///
/// Numbers get `default_unit` appended (`10` → `10px`); text, including
/// `var()` and `calc()`, is returned unchanged.
#[must_use]
pub fn normalize_css_value(value: &CssValue, default_unit: Option<&str>) -> String {
    match value {
        CssValue::Number(n) => format!("{}{}", n + 0.0, default_unit.unwrap_or_default()),
        CssValue::Text(text) => text.clone(),
    }
}
