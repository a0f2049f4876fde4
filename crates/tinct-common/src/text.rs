//! Identifier case conversion.

/// Convert an identifier to kebab-case.
///
/// A lowercase letter followed by an uppercase letter gets a `-` between
/// them, runs of whitespace and underscores collapse into a single `-`, and
/// the result is lowercased.
///
/// ```
/// use tinct_common::kebab_case;
///
/// assert_eq!(kebab_case("surfaceTopColorDark"), "surface-top-color-dark");
/// assert_eq!(kebab_case("front_color  dark"), "front-color-dark");
/// ```
#[must_use]
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_separator = false;

    for c in input.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_separator {
                out.push('-');
                in_separator = true;
            }
            prev = Some(c);
            continue;
        }
        in_separator = false;

        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}
