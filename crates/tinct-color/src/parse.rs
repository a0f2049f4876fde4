//! Color parsing.
//!
//! Turns a [`Color`] into a [`ParsedColor`]: concrete [`Rgba`] channels, or
//! a `var()` reference kept for later.
//!
//! Numeric input is never clamped here. `rgb(300 0 0)` parses to a red
//! channel of 300 and it is up to the caller to reject or clamp it; the
//! serializer only saturates when it has to fit a byte.

use crate::convert::hsl_to_rgb;
use crate::error::ColorError;
use crate::token::{ColorFunction, ColorToken};
use crate::value::{Color, Hsla, ParsedColor, Rgba};

/// Parse a caller-supplied color.
///
/// # Errors
///
/// - [`ColorError::UnsupportedFormat`] when the input is not a packed
///   integer, keyword, `var()` reference, valid hex literal, or color
///   function.
/// - [`ColorError::MissingNumericComponent`] when a color function does not
///   hold three numbers plus an optional alpha.
pub fn parse(input: &Color) -> Result<ParsedColor, ColorError> {
    let token = ColorToken::classify(input)?;
    log::trace!("classified color {input} as {token:?}");
    resolve(token)
}

/// Parse a color string. Same as [`parse`] on [`Color::Css`].
///
/// # Errors
///
/// See [`parse`].
pub fn parse_str(input: &str) -> Result<ParsedColor, ColorError> {
    let token = ColorToken::classify_str(input)?;
    log::trace!("classified color {input:?} as {token:?}");
    resolve(token)
}

/// Resolve an already classified token.
///
/// # Errors
///
/// See [`parse`].
pub fn resolve(token: ColorToken<'_>) -> Result<ParsedColor, ColorError> {
    let resolved = match token {
        ColorToken::Packed(value) | ColorToken::Named { value, .. } => {
            ParsedColor::Rgba(Rgba::from_packed(value))
        }
        ColorToken::CustomPropertyRef(reference) => ParsedColor::Deferred(reference.to_string()),
        ColorToken::Hex(literal) => ParsedColor::Rgba(parse_hex(literal)?),
        ColorToken::Functional {
            function,
            arguments,
            literal,
        } => ParsedColor::Rgba(parse_function(function, arguments, literal)?),
    };
    Ok(resolved)
}

/// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
///
/// "The three-digit RGB notation (#RGB) is converted into six-digit form
/// (#RRGGBB) by replicating digits, not by adding zeros."
fn parse_hex(literal: &str) -> Result<Rgba, ColorError> {
    let unsupported = || ColorError::UnsupportedFormat(literal.to_string());

    let digits = literal.strip_prefix('#').ok_or_else(unsupported)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(unsupported());
    }

    let channel = |start: usize, len: usize| -> Result<f64, ColorError> {
        digits
            .get(start..start + len)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(f64::from)
            .ok_or_else(unsupported)
    };

    match digits.len() {
        // Nibble duplication: 0xa → 0xaa, i.e. n * 17.
        3 => Ok(Rgba::new(
            channel(0, 1)? * 17.0,
            channel(1, 1)? * 17.0,
            channel(2, 1)? * 17.0,
            1.0,
        )),
        6 => Ok(Rgba::new(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?, 1.0)),
        8 => Ok(Rgba::new(
            channel(0, 2)?,
            channel(2, 2)?,
            channel(4, 2)?,
            channel(6, 2)? / 255.0,
        )),
        _ => Err(unsupported()),
    }
}

/// A numeric argument of a color function.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ColorArg {
    Number(f64),
    Percentage(f64),
    /// A number with a `deg` unit. Only meaningful as a hue.
    Degrees(f64),
}

/// The three channel arguments and the optional alpha of a color function.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ColorArgs {
    channels: [ColorArg; 3],
    alpha: Option<ColorArg>,
}

/// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
/// [§ 7.1 The HSL functions](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// "For legacy reasons, rgb() also supports an alternate syntax that
/// separates all of its arguments with commas."
fn parse_function(
    function: ColorFunction,
    arguments: &str,
    literal: &str,
) -> Result<Rgba, ColorError> {
    let missing = || ColorError::MissingNumericComponent(literal.to_string());
    let args = split_arguments(arguments).ok_or_else(missing)?;

    // "If omitted, it defaults to 100%."
    let a = match args.alpha {
        None => 1.0,
        Some(ColorArg::Number(n)) => n,
        Some(ColorArg::Percentage(p)) => p / 100.0,
        Some(ColorArg::Degrees(_)) => return Err(missing()),
    };

    let [first, second, third] = args.channels;

    if function.is_hsl() {
        // "<hue> is a <number> or <angle>, interpreted as degrees."
        let h = match first {
            ColorArg::Number(v) | ColorArg::Degrees(v) => v,
            ColorArg::Percentage(_) => return Err(missing()),
        };
        let percent = |arg: ColorArg| match arg {
            ColorArg::Number(v) | ColorArg::Percentage(v) => Ok(v),
            ColorArg::Degrees(_) => Err(missing()),
        };
        let hsla = Hsla::new(h, percent(second)?, percent(third)?, a);
        return Ok(hsl_to_rgb(hsla));
    }

    // "100% = 255"
    let channel = |arg: ColorArg| match arg {
        ColorArg::Number(v) => Ok(v),
        ColorArg::Percentage(p) => Ok(p * 255.0 / 100.0),
        ColorArg::Degrees(_) => Err(missing()),
    };
    Ok(Rgba::new(channel(first)?, channel(second)?, channel(third)?, a))
}

/// Split the text between the parentheses into channels and alpha.
///
/// Commas and whitespace both separate arguments and empty tokens are
/// dropped, so `1, 2, 3`, `1 2 3` and `1,,2 ,3` read the same. A `/`
/// introduces the alpha term of the modern syntax; without one, a fourth
/// argument is the alpha.
fn split_arguments(arguments: &str) -> Option<ColorArgs> {
    let (channel_text, alpha_text) = match arguments.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha)),
        None => (arguments, None),
    };

    let mut channels = tokens(channel_text)
        .map(parse_arg)
        .collect::<Option<Vec<_>>>()?;

    let alpha = match alpha_text {
        Some(text) => {
            let mut alpha_tokens = tokens(text);
            match (alpha_tokens.next(), alpha_tokens.next()) {
                (Some(token), None) => Some(parse_arg(token)?),
                _ => return None,
            }
        }
        None if channels.len() == 4 => channels.pop(),
        None => None,
    };

    let channels: [ColorArg; 3] = channels.try_into().ok()?;
    Some(ColorArgs { channels, alpha })
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse one argument. Rejects anything that is not a finite number with an
/// optional `%` or `deg` suffix.
fn parse_arg(token: &str) -> Option<ColorArg> {
    let (number, wrap): (&str, fn(f64) -> ColorArg) = if let Some(n) = token.strip_suffix('%') {
        (n, ColorArg::Percentage)
    } else if let Some(n) = token.strip_suffix("deg") {
        (n, ColorArg::Degrees)
    } else {
        (token, ColorArg::Number)
    };

    let value: f64 = number.parse().ok()?;
    value.is_finite().then(|| wrap(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg_units() {
        assert_eq!(parse_arg("12.5"), Some(ColorArg::Number(12.5)));
        assert_eq!(parse_arg("50%"), Some(ColorArg::Percentage(50.0)));
        assert_eq!(parse_arg("90deg"), Some(ColorArg::Degrees(90.0)));
        assert_eq!(parse_arg("-.5"), Some(ColorArg::Number(-0.5)));
    }

    #[test]
    fn test_parse_arg_rejects_non_numbers() {
        assert_eq!(parse_arg("abc"), None);
        assert_eq!(parse_arg("NaN"), None);
        assert_eq!(parse_arg("inf"), None);
        assert_eq!(parse_arg("%"), None);
    }

    #[test]
    fn test_split_legacy_and_modern_agree() {
        let legacy = split_arguments("10, 20, 30, 0.5");
        let modern = split_arguments("10 20 30 / 0.5");
        assert_eq!(legacy, modern);
        assert_eq!(
            legacy.map(|a| a.alpha),
            Some(Some(ColorArg::Number(0.5)))
        );
    }

    #[test]
    fn test_split_drops_stray_separators() {
        let args = split_arguments(" 1 ,, 2 ,3 ").map(|a| a.channels);
        assert_eq!(
            args,
            Some([
                ColorArg::Number(1.0),
                ColorArg::Number(2.0),
                ColorArg::Number(3.0)
            ])
        );
    }

    #[test]
    fn test_split_wrong_counts() {
        assert_eq!(split_arguments("1, 2"), None);
        assert_eq!(split_arguments("1, 2, 3, 4, 5"), None);
        assert_eq!(split_arguments("1 2 3 4 / 5"), None);
        assert_eq!(split_arguments("1 2 3 /"), None);
        assert_eq!(split_arguments("1 2 3 / 4 5"), None);
        assert_eq!(split_arguments("1 2 3 / 4 / 5"), None);
    }
}
