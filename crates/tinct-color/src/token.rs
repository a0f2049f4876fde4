//! Color input classification.
//!
//! A raw [`Color`] is inspected exactly once and turned into a
//! [`ColorToken`]; everything downstream matches on the token instead of
//! re-examining the input text.

use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::error::ColorError;
use crate::named;
use crate::value::{Color, PackedColor};

/// The functional notations the parser understands.
///
/// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
/// [§ 7.1 The HSL functions](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// "Also for legacy reasons, an rgba() function also exists, with an
/// identical grammar and behavior to rgb()." The same holds for hsla().
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorFunction {
    /// `rgb(...)`
    Rgb,
    /// `rgba(...)`
    Rgba,
    /// `hsl(...)`
    Hsl,
    /// `hsla(...)`
    Hsla,
}

impl ColorFunction {
    /// Whether the arguments are hue, saturation and lightness.
    #[must_use]
    pub const fn is_hsl(self) -> bool {
        matches!(self, Self::Hsl | Self::Hsla)
    }
}

/// A classified color input.
///
/// Textual variants borrow from the trimmed input literal, except
/// [`ColorToken::CustomPropertyRef`], which keeps the input as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken<'a> {
    /// A packed `0xRRGGBBAA` integer.
    Packed(PackedColor),
    /// A color keyword, already resolved through the named-color table.
    Named {
        /// The keyword as written.
        name: &'a str,
        /// Its packed value.
        value: PackedColor,
    },
    /// A `var(--name)` reference, exactly as written (surrounding
    /// whitespace included).
    CustomPropertyRef(&'a str),
    /// A `#`-prefixed literal, `#` included. Digits are validated later.
    Hex(&'a str),
    /// `rgb()`, `rgba()`, `hsl()` or `hsla()`.
    Functional {
        /// Which function.
        function: ColorFunction,
        /// The text between the parentheses.
        arguments: &'a str,
        /// The whole literal, for error reporting.
        literal: &'a str,
    },
}

impl<'a> ColorToken<'a> {
    /// Classify a caller-supplied color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedFormat`] if the input fits none of
    /// the recognized shapes.
    pub fn classify(input: &'a Color) -> Result<Self, ColorError> {
        match input {
            Color::Packed(value) => Ok(Self::Packed(*value)),
            Color::Css(text) => Self::classify_str(text),
        }
    }

    /// Classify a color string.
    ///
    /// Precedence follows the parser: keyword, then `var()`, then `#hex`,
    /// then functional notation.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedFormat`] if the input fits none of
    /// the recognized shapes.
    pub fn classify_str(input: &'a str) -> Result<Self, ColorError> {
        let literal = input.trim();

        if let Some(value) = named::lookup(literal) {
            return Ok(Self::Named {
                name: literal,
                value,
            });
        }

        if is_custom_property_ref(literal) {
            return Ok(Self::CustomPropertyRef(input));
        }

        if literal.starts_with('#') {
            return Ok(Self::Hex(literal));
        }

        if let Some((function, arguments)) = split_function(literal) {
            return Ok(Self::Functional {
                function,
                arguments,
                literal,
            });
        }

        Err(ColorError::UnsupportedFormat(input.to_string()))
    }
}

/// [CSS Custom Properties § 3](https://www.w3.org/TR/css-variables-1/#using-variables)
///
/// "var() = var( <custom-property-name> [, <declaration-value>]? )"
///
/// Checks the outer shape only: a `var(` prefix (any ASCII case), a `--`
/// name with at least one character, and a closing parenthesis. A fallback
/// after a comma is allowed and kept as part of the reference.
#[must_use]
pub fn is_custom_property_ref(literal: &str) -> bool {
    let Some(prefix) = literal.get(..4) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case("var(") {
        return false;
    }
    let Some(inner) = literal[4..].strip_suffix(')') else {
        return false;
    };
    let name = inner.split(',').next().unwrap_or_default().trim();
    name.strip_prefix("--").is_some_and(|rest| !rest.is_empty())
}

/// Split `name(args)` into a known color function and its argument text.
fn split_function(literal: &str) -> Option<(ColorFunction, &str)> {
    let open = literal.find('(')?;
    let function: ColorFunction = literal[..open].trim_end().parse().ok()?;
    let arguments = literal[open + 1..].strip_suffix(')')?;
    Some((function, arguments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_function() {
        assert_eq!(
            split_function("rgba(1, 2, 3)"),
            Some((ColorFunction::Rgba, "1, 2, 3"))
        );
        assert_eq!(split_function("HSL(1 2 3)"), Some((ColorFunction::Hsl, "1 2 3")));
        assert_eq!(split_function("rgb(1, 2, 3"), None);
        assert_eq!(split_function("lab(1 2 3)"), None);
    }

    #[test]
    fn test_custom_property_shapes() {
        assert!(is_custom_property_ref("var(--brand-color)"));
        assert!(is_custom_property_ref("VAR(--x)"));
        assert!(is_custom_property_ref("var(--x, red)"));
        assert!(!is_custom_property_ref("var(--)"));
        assert!(!is_custom_property_ref("var(brand)"));
        assert!(!is_custom_property_ref("var(--x"));
        assert!(!is_custom_property_ref("va"));
    }

    #[test]
    fn test_keyword_wins_over_other_shapes() {
        assert!(matches!(
            ColorToken::classify_str("  Red "),
            Ok(ColorToken::Named { name: "Red", value: 0xff00_00ff })
        ));
    }
}
