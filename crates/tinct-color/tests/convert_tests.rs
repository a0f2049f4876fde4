//! Integration tests for RGB ↔ HSL conversion and lightness adjustment.

use tinct_color::{Hsla, Rgba, darken, hsl_to_rgb, lighten, rgb_to_hsl};

fn assert_hsla_close(actual: Hsla, expected: Hsla) {
    for (got, want) in [
        (actual.h, expected.h),
        (actual.s, expected.s),
        (actual.l, expected.l),
        (actual.a, expected.a),
    ] {
        assert!(
            (got - want).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }
}

#[test]
fn test_achromatic_gray() {
    let hsla = rgb_to_hsl(Rgba::new(128.0, 128.0, 128.0, 1.0));
    assert_eq!(hsla.s, 0.0);
    assert_eq!(hsla.h, 0.0);
    assert!((hsla.l - 128.0 / 255.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_black_and_white() {
    assert_hsla_close(rgb_to_hsl(Rgba::BLACK), Hsla::new(0.0, 0.0, 0.0, 1.0));
    assert_hsla_close(rgb_to_hsl(Rgba::WHITE), Hsla::new(0.0, 0.0, 100.0, 1.0));
}

#[test]
fn test_primaries_and_secondaries() {
    let cases = [
        (Rgba::new(255.0, 0.0, 0.0, 1.0), 0.0),
        (Rgba::new(255.0, 255.0, 0.0, 1.0), 60.0),
        (Rgba::new(0.0, 255.0, 0.0, 1.0), 120.0),
        (Rgba::new(0.0, 255.0, 255.0, 1.0), 180.0),
        (Rgba::new(0.0, 0.0, 255.0, 1.0), 240.0),
        (Rgba::new(255.0, 0.0, 255.0, 1.0), 300.0),
    ];
    for (rgba, hue) in cases {
        assert_hsla_close(rgb_to_hsl(rgba), Hsla::new(hue, 100.0, 50.0, 1.0));
    }
}

#[test]
fn test_red_dominant_hue_stays_below_360() {
    // Red max with blue above green lands in the last sector.
    let hsla = rgb_to_hsl(Rgba::new(255.0, 0.0, 1.0, 1.0));
    assert!(hsla.h > 359.0 && hsla.h < 360.0, "{hsla:?}");
}

#[test]
fn test_saturation_denominator_above_half_lightness() {
    // l > 50%: s = d / (2 - max - min)
    let hsla = rgb_to_hsl(Rgba::new(255.0, 204.0, 204.0, 1.0));
    assert!((hsla.s - 100.0).abs() < 1e-9);
    assert!((hsla.l - 90.0).abs() < 1e-9);
}

#[test]
fn test_alpha_carried_through() {
    assert_eq!(rgb_to_hsl(Rgba::new(10.0, 20.0, 30.0, 0.3)).a, 0.3);
    assert_eq!(hsl_to_rgb(Hsla::new(10.0, 20.0, 30.0, 0.7)).a, 0.7);
}

#[test]
fn test_hsl_to_rgb_known_value() {
    // rebeccapurple
    let rgba = hsl_to_rgb(Hsla::new(270.0, 50.0, 40.0, 1.0));
    assert!((rgba.r - 102.0).abs() < 1e-9);
    assert!((rgba.g - 51.0).abs() < 1e-9);
    assert!((rgba.b - 153.0).abs() < 1e-9);
}

#[test]
fn test_lighten_and_darken_clamp() {
    let base = Hsla::new(200.0, 50.0, 95.0, 1.0);
    assert_eq!(lighten(base, 10.0).l, 100.0);
    assert_eq!(darken(base, 10.0).l, 85.0);
    assert_eq!(darken(Hsla::new(0.0, 0.0, 5.0, 1.0), 15.0).l, 0.0);
}

#[test]
fn test_adjustment_leaves_other_fields() {
    let base = Hsla::new(12.5, 40.0, 50.0, 0.5);
    let lighter = base.lighten(10.0);
    assert_eq!(lighter, Hsla::new(12.5, 40.0, 60.0, 0.5));
    // The input value is untouched.
    assert_eq!(base.l, 50.0);
}

#[test]
fn test_adjust_keeps_nan_lightness() {
    let undefined = Hsla::new(0.0, 0.0, f64::NAN, 1.0);
    assert!(darken(undefined, 10.0).l.is_nan());
    assert!(lighten(undefined, 10.0).l.is_nan());
}
