//! Box style variables.
//!
//! Turns a box description into the custom properties its stylesheet reads:
//! `--wx`, `--wy`, `--wz` for the dimensions, then the surface colors in
//! one of two layouts.
//!
//! - [`StyleStrategy::Flat`]: one short variable per color entry
//!   (`--sa`, `--st`, `--sb`, `--sf`, `--sbk`, `--sl`, `--sr`), each color
//!   serialized as given.
//! - [`StyleStrategy::Shaded`]: every face resolved (face entry, else
//!   `all`) and emitted with darker and lighter variants
//!   (`--surface-top-color-dark`, ...), so the stylesheet can fake lighting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tinct_color::{Color, Hsla, OutputEncoding, ParsedColor, Rgba, darken, lighten, serialize, serialize_hsla};
use tinct_common::kebab_case;
use tinct_common::warning::warn_once;

use crate::error::StyleError;
use crate::surface::{SideColors, Surface, SurfaceColors};
use crate::values::{CssValue, normalize_css_value};
use crate::vars::StyleVars;

/// Per-axis box dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Width along x
    pub wx: CssValue,
    /// Width along y
    pub wy: CssValue,
    /// Width along z
    pub wz: CssValue,
}

/// A box size: one value for all three axes, or one per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxSize {
    /// A cube
    Uniform(CssValue),
    /// Independent axes
    PerAxis(BoxDimensions),
}

impl BoxSize {
    /// `[wx, wy, wz]` as declaration values; bare numbers become pixels.
    #[must_use]
    pub fn dimensions(&self) -> [String; 3] {
        match self {
            Self::Uniform(value) => {
                let v = normalize_css_value(value, Some("px"));
                [v.clone(), v.clone(), v]
            }
            Self::PerAxis(dims) => [
                normalize_css_value(&dims.wx, Some("px")),
                normalize_css_value(&dims.wy, Some("px")),
                normalize_css_value(&dims.wz, Some("px")),
            ],
        }
    }
}

impl From<f64> for BoxSize {
    fn from(value: f64) -> Self {
        Self::Uniform(CssValue::Number(value))
    }
}

/// Everything needed to style one box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxProps {
    /// Box dimensions
    pub size: BoxSize,
    /// Surface colors; red on every face when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_color: Option<SurfaceColors>,
}

/// Which surface color layout to emit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StyleStrategy {
    /// One variable per color entry, colors passed through
    #[default]
    Flat,
    /// Every face resolved, with light and dark variants
    Shaded,
}

impl StyleStrategy {
    /// The encoding each layout uses unless configured otherwise.
    #[must_use]
    pub const fn native_encoding(self) -> OutputEncoding {
        match self {
            Self::Flat => OutputEncoding::Hex,
            Self::Shaded => OutputEncoding::Hsla,
        }
    }
}

/// Lightness offsets, in percentage points, for the shaded layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadeOffsets {
    /// `--surface-top-color-dark`
    pub top_dark: f64,
    /// `--surface-top-color-light`
    pub top_light: f64,
    /// `--surface-bottom-color-dark`
    pub bottom_dark: f64,
    /// `--surface-front-color-dark`
    pub front_dark: f64,
    /// `--surface-left-color-dark`
    pub left_dark: f64,
    /// `--surface-left-color-medium`
    pub left_medium: f64,
    /// `--surface-right-color-dark`
    pub right_dark: f64,
    /// `--surface-right-color-medium`
    pub right_medium: f64,
}

impl Default for ShadeOffsets {
    fn default() -> Self {
        Self {
            top_dark: 15.0,
            top_light: 10.0,
            bottom_dark: 10.0,
            front_dark: 10.0,
            left_dark: 15.0,
            left_medium: 10.0,
            right_dark: 15.0,
            right_medium: 10.0,
        }
    }
}

/// Style generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Surface color layout
    pub strategy: StyleStrategy,
    /// How colors are written
    pub encoding: OutputEncoding,
    /// Shaded layout offsets
    pub shades: ShadeOffsets,
}

impl StyleConfig {
    /// Settings for `strategy` with its native encoding and stock offsets.
    #[must_use]
    pub fn for_strategy(strategy: StyleStrategy) -> Self {
        Self {
            strategy,
            encoding: strategy.native_encoding(),
            shades: ShadeOffsets::default(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::for_strategy(StyleStrategy::default())
    }
}

/// Generate the style variables for a box.
///
/// # Errors
///
/// - [`StyleError::Color`] if a surface color does not parse.
/// - [`StyleError::MissingSurfaceColor`] (shaded) if a face has neither its
///   own color nor `all`.
/// - [`StyleError::DeferredColor`] (shaded) if a face color is a `var()`
///   reference.
pub fn box_style_vars(props: &BoxProps, config: &StyleConfig) -> Result<StyleVars, StyleError> {
    let mut vars = StyleVars::new();

    let [wx, wy, wz] = props.size.dimensions();
    vars.insert("--wx", wx)?;
    vars.insert("--wy", wy)?;
    vars.insert("--wz", wz)?;

    let sides = props.surface_color.clone().map_or_else(
        || {
            log::debug!("no surface color given, using the default");
            SurfaceColors::default().into_sides()
        },
        SurfaceColors::into_sides,
    );

    match config.strategy {
        StyleStrategy::Flat => flat_colors(&sides, config.encoding, &mut vars)?,
        StyleStrategy::Shaded => shaded_colors(&sides, config, &mut vars)?,
    }

    Ok(vars)
}

fn parse_surface(surface: Surface, color: &Color) -> Result<ParsedColor, StyleError> {
    color
        .parse()
        .map_err(|source| StyleError::Color { surface, source })
}

/// `--s{suffix}` for every entry actually present, `all` first.
fn flat_colors(
    sides: &SideColors,
    encoding: OutputEncoding,
    vars: &mut StyleVars,
) -> Result<(), StyleError> {
    let mut wrote_any = false;

    for surface in Surface::iter() {
        let Some(color) = sides.get(surface) else {
            continue;
        };
        let parsed = parse_surface(surface, color)?;
        vars.insert(
            format!("--s{}", surface.short_suffix()),
            serialize(&parsed, encoding),
        )?;
        wrote_any = true;
    }

    if !wrote_any {
        warn_once("style", "surface color map has no entries, using black");
        vars.insert(
            format!("--s{}", Surface::All.short_suffix()),
            serialize(&ParsedColor::Rgba(Rgba::BLACK), encoding),
        )?;
    }

    Ok(())
}

/// How a shaded variable derives from its face color.
#[derive(Debug, Clone, Copy)]
enum Shade {
    Base,
    Darken(f64),
    Lighten(f64),
}

/// Variable identifiers (kebab-cased on output), their face and shade, in
/// emission order.
fn shade_plan(offsets: &ShadeOffsets) -> [(&'static str, Surface, Shade); 13] {
    [
        ("surfaceTopColor", Surface::Top, Shade::Base),
        ("surfaceTopColorDark", Surface::Top, Shade::Darken(offsets.top_dark)),
        ("surfaceTopColorLight", Surface::Top, Shade::Lighten(offsets.top_light)),
        ("surfaceBottomColorDark", Surface::Bottom, Shade::Darken(offsets.bottom_dark)),
        ("surfaceFrontColor", Surface::Front, Shade::Base),
        ("surfaceFrontColorDark", Surface::Front, Shade::Darken(offsets.front_dark)),
        ("surfaceBackColor", Surface::Back, Shade::Base),
        ("surfaceLeftColor", Surface::Left, Shade::Base),
        ("surfaceLeftColorDark", Surface::Left, Shade::Darken(offsets.left_dark)),
        ("surfaceLeftColorMedium", Surface::Left, Shade::Darken(offsets.left_medium)),
        ("surfaceRightColor", Surface::Right, Shade::Base),
        ("surfaceRightColorDark", Surface::Right, Shade::Darken(offsets.right_dark)),
        ("surfaceRightColorMedium", Surface::Right, Shade::Darken(offsets.right_medium)),
    ]
}

/// Resolve a face to concrete HSLA.
fn face_hsla(sides: &SideColors, face: Surface) -> Result<Hsla, StyleError> {
    let color = sides
        .resolve(face)
        .ok_or(StyleError::MissingSurfaceColor(face))?;
    if sides.get(face).is_none() {
        log::trace!("{face} surface falls back to `all`");
    }

    match parse_surface(face, color)? {
        ParsedColor::Rgba(rgba) => Ok(rgba.to_hsla()),
        ParsedColor::Deferred(reference) => Err(StyleError::DeferredColor {
            surface: face,
            reference,
        }),
    }
}

fn shaded_colors(
    sides: &SideColors,
    config: &StyleConfig,
    vars: &mut StyleVars,
) -> Result<(), StyleError> {
    let mut faces = HashMap::with_capacity(Surface::FACES.len());
    for face in Surface::FACES {
        let _ = faces.insert(face, face_hsla(sides, face)?);
    }

    for (identifier, face, shade) in shade_plan(&config.shades) {
        let base = faces[&face];
        let shaded = match shade {
            Shade::Base => base,
            Shade::Darken(amount) => darken(base, amount),
            Shade::Lighten(amount) => lighten(base, amount),
        };
        vars.insert(
            format!("--{}", kebab_case(identifier)),
            serialize_hsla(shaded, config.encoding),
        )?;
    }

    Ok(())
}
