//! Integration tests for box style-variable generation.

use tinct_color::{Color, ColorError, OutputEncoding};
use tinct_style::{
    BoxDimensions, BoxProps, BoxSize, CssValue, SideColors, StyleConfig, StyleError,
    StyleStrategy, Surface, SurfaceColors, box_style_vars,
};

fn props(size: f64, surface_color: Option<SurfaceColors>) -> BoxProps {
    BoxProps {
        size: BoxSize::from(size),
        surface_color,
    }
}

fn flat() -> StyleConfig {
    StyleConfig::for_strategy(StyleStrategy::Flat)
}

fn shaded() -> StyleConfig {
    StyleConfig::for_strategy(StyleStrategy::Shaded)
}

fn pairs(vars: &tinct_style::StyleVars) -> Vec<(String, String)> {
    vars.iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}

fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(n, v)| ((*n).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_flat_default_surface_is_red() {
    let vars = box_style_vars(&props(10.0, None), &flat()).unwrap();
    assert_eq!(
        pairs(&vars),
        owned(&[
            ("--wx", "10px"),
            ("--wy", "10px"),
            ("--wz", "10px"),
            ("--sa", "#ff0000ff"),
        ])
    );
}

#[test]
fn test_flat_only_present_entries() {
    let sides = SideColors {
        top: Some(Color::from("#00ff00")),
        left: Some(Color::Packed(0x0000_ffff)),
        ..SideColors::default()
    };
    let vars = box_style_vars(&props(4.0, Some(SurfaceColors::Sides(sides))), &flat()).unwrap();
    assert_eq!(vars.get("--sa"), None);
    assert_eq!(vars.get("--st"), Some("#00ff00ff"));
    assert_eq!(vars.get("--sl"), Some("#0000ffff"));
    assert_eq!(
        vars.names().collect::<Vec<_>>(),
        vec!["--wx", "--wy", "--wz", "--st", "--sl"]
    );
}

#[test]
fn test_flat_all_suffixes() {
    let c = || Some(Color::from("white"));
    let sides = SideColors {
        all: c(),
        top: c(),
        bottom: c(),
        front: c(),
        back: c(),
        left: c(),
        right: c(),
    };
    let vars = box_style_vars(&props(1.0, Some(SurfaceColors::Sides(sides))), &flat()).unwrap();
    assert_eq!(
        vars.names().skip(3).collect::<Vec<_>>(),
        vec!["--sa", "--st", "--sb", "--sf", "--sbk", "--sl", "--sr"]
    );
}

#[test]
fn test_flat_empty_map_falls_back_to_black() {
    let vars = box_style_vars(
        &props(1.0, Some(SurfaceColors::Sides(SideColors::default()))),
        &flat(),
    )
    .unwrap();
    assert_eq!(vars.get("--sa"), Some("#000000ff"));
    assert_eq!(vars.len(), 4);
}

#[test]
fn test_flat_encodings() {
    let mut config = flat();
    config.encoding = OutputEncoding::Packed;
    let vars = box_style_vars(&props(1.0, None), &config).unwrap();
    assert_eq!(vars.get("--sa"), Some("4278190335"));

    config.encoding = OutputEncoding::Hsla;
    let vars = box_style_vars(&props(1.0, None), &config).unwrap();
    assert_eq!(vars.get("--sa"), Some("hsla(0, 100%, 50%, 1)"));
}

#[test]
fn test_flat_passes_deferred_reference() {
    let surface = SurfaceColors::Single(Color::from("var(--brand)"));
    let vars = box_style_vars(&props(1.0, Some(surface)), &flat()).unwrap();
    assert_eq!(vars.get("--sa"), Some("var(--brand)"));
}

#[test]
fn test_flat_reports_bad_color() {
    let sides = SideColors {
        front: Some(Color::from("nope")),
        ..SideColors::default()
    };
    assert_eq!(
        box_style_vars(&props(1.0, Some(SurfaceColors::Sides(sides))), &flat()),
        Err(StyleError::Color {
            surface: Surface::Front,
            source: ColorError::UnsupportedFormat("nope".to_string()),
        })
    );
}

#[test]
fn test_per_axis_dimensions() {
    let props = BoxProps {
        size: BoxSize::PerAxis(BoxDimensions {
            wx: CssValue::Number(12.5),
            wy: CssValue::from("2rem"),
            wz: CssValue::from("var(--depth)"),
        }),
        surface_color: None,
    };
    let vars = box_style_vars(&props, &flat()).unwrap();
    assert_eq!(vars.get("--wx"), Some("12.5px"));
    assert_eq!(vars.get("--wy"), Some("2rem"));
    assert_eq!(vars.get("--wz"), Some("var(--depth)"));
}

#[test]
fn test_shaded_layout_and_offsets() {
    let surface = SurfaceColors::Single(Color::from("#ff0000"));
    let vars = box_style_vars(&props(20.0, Some(surface)), &shaded()).unwrap();
    assert_eq!(
        pairs(&vars),
        owned(&[
            ("--wx", "20px"),
            ("--wy", "20px"),
            ("--wz", "20px"),
            ("--surface-top-color", "hsla(0, 100%, 50%, 1)"),
            ("--surface-top-color-dark", "hsla(0, 100%, 35%, 1)"),
            ("--surface-top-color-light", "hsla(0, 100%, 60%, 1)"),
            ("--surface-bottom-color-dark", "hsla(0, 100%, 40%, 1)"),
            ("--surface-front-color", "hsla(0, 100%, 50%, 1)"),
            ("--surface-front-color-dark", "hsla(0, 100%, 40%, 1)"),
            ("--surface-back-color", "hsla(0, 100%, 50%, 1)"),
            ("--surface-left-color", "hsla(0, 100%, 50%, 1)"),
            ("--surface-left-color-dark", "hsla(0, 100%, 35%, 1)"),
            ("--surface-left-color-medium", "hsla(0, 100%, 40%, 1)"),
            ("--surface-right-color", "hsla(0, 100%, 50%, 1)"),
            ("--surface-right-color-dark", "hsla(0, 100%, 35%, 1)"),
            ("--surface-right-color-medium", "hsla(0, 100%, 40%, 1)"),
        ])
    );
}

#[test]
fn test_shaded_face_overrides_all() {
    let sides = SideColors {
        all: Some(Color::from("red")),
        top: Some(Color::from("white")),
        ..SideColors::default()
    };
    let vars = box_style_vars(&props(1.0, Some(SurfaceColors::Sides(sides))), &shaded()).unwrap();
    assert_eq!(vars.get("--surface-top-color"), Some("hsla(0, 0%, 100%, 1)"));
    // Lightening white stays clamped at 100%.
    assert_eq!(vars.get("--surface-top-color-light"), Some("hsla(0, 0%, 100%, 1)"));
    assert_eq!(vars.get("--surface-top-color-dark"), Some("hsla(0, 0%, 85%, 1)"));
    assert_eq!(vars.get("--surface-back-color"), Some("hsla(0, 100%, 50%, 1)"));
}

#[test]
fn test_shaded_custom_offsets() {
    let mut config = shaded();
    config.shades.top_dark = 50.0;
    let vars = box_style_vars(&props(1.0, None), &config).unwrap();
    assert_eq!(vars.get("--surface-top-color-dark"), Some("hsla(0, 100%, 0%, 1)"));
}

#[test]
fn test_shaded_hex_encoding() {
    let mut config = shaded();
    config.encoding = OutputEncoding::Hex;
    let vars = box_style_vars(&props(1.0, None), &config).unwrap();
    assert_eq!(vars.get("--surface-top-color"), Some("#ff0000ff"));
}

#[test]
fn test_shaded_missing_face() {
    let sides = SideColors {
        top: Some(Color::from("red")),
        ..SideColors::default()
    };
    assert_eq!(
        box_style_vars(&props(1.0, Some(SurfaceColors::Sides(sides))), &shaded()),
        Err(StyleError::MissingSurfaceColor(Surface::Bottom))
    );
}

#[test]
fn test_shaded_rejects_deferred_reference() {
    let surface = SurfaceColors::Single(Color::from("var(--c)"));
    let err = box_style_vars(&props(1.0, Some(surface)), &shaded()).unwrap_err();
    assert_eq!(
        err,
        StyleError::DeferredColor {
            surface: Surface::Top,
            reference: "var(--c)".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "The top surface uses var(--c), which cannot be shaded"
    );
}
