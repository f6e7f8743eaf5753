//! Integration tests for the theme_colors public API
//!
//! These validate the end-to-end contracts a configurator front-end relies
//! on: exact hex round-trips, float-level HLS round-trip tolerance, WCAG
//! contrast invariants, scheme-generation guarantees, text emission, and
//! config loading.

use theme_colors::color::conversion::{hls_to_rgb_unit, rgb_to_hls_unit};
use theme_colors::{
    contrast_ratio, format_hex, generate_color_scheme, parse_hex, relative_luminance, Rgb,
    SchemeGenerator, ThemeColor, ThemeConfig, ThemeError, WcagLevel,
};

// ============================================================================
// Hex Round-Trip
// ============================================================================

#[test]
fn test_hex_round_trip_exact() {
    let samples = [
        "#ff4b4b", "#ffffff", "#000000", "#0e1117", "#262730", "#f0f2f6", "#31333f", "#fafafa",
        "#00010f", "#abcdef",
    ];
    for hex in samples {
        assert_eq!(format_hex(parse_hex(hex).unwrap()), hex);
    }
}

#[test]
fn test_hex_round_trip_lowercases_input() {
    assert_eq!(format_hex(parse_hex("#FF4B4B").unwrap()), "#ff4b4b");
}

#[test]
fn test_parse_hex_example_from_docs() {
    assert_eq!(parse_hex("#ff4b4b").unwrap(), Rgb::new(255, 75, 75));
    assert_eq!(format_hex(Rgb::new(255, 75, 75)), "#ff4b4b");
}

#[test]
fn test_parse_hex_error_keeps_variant() {
    match parse_hex("not-a-color") {
        Err(ThemeError::FormatError { input, .. }) => assert_eq!(input, "not-a-color"),
        other => panic!("expected FormatError, got {:?}", other),
    }
}

// ============================================================================
// Float HLS Round-Trip
// ============================================================================

#[test]
fn test_unit_hls_round_trip_within_tolerance() {
    // Sweep a grid of RGB triples; without integer rounding the conversion
    // must reproduce the input to well under 1e-6.
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for b in (0..=255).step_by(51) {
                let (rf, gf, bf) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
                let (h, l, s) = rgb_to_hls_unit(rf, gf, bf);
                let (r2, g2, b2) = hls_to_rgb_unit(h, l, s);
                assert!((rf - r2).abs() < 1e-6, "r drift at ({}, {}, {})", r, g, b);
                assert!((gf - g2).abs() < 1e-6, "g drift at ({}, {}, {})", r, g, b);
                assert!((bf - b2).abs() < 1e-6, "b drift at ({}, {}, {})", r, g, b);
            }
        }
    }
}

// ============================================================================
// WCAG Contrast
// ============================================================================

#[test]
fn test_contrast_symmetry() {
    let a = parse_hex("#ff4b4b").unwrap();
    let b = parse_hex("#0e1117").unwrap();
    assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
}

#[test]
fn test_contrast_self_is_unity() {
    let color = parse_hex("#f0f2f6").unwrap();
    assert!((contrast_ratio(color, color) - 1.0).abs() < 1e-12);
}

#[test]
fn test_contrast_black_vs_white_is_max() {
    let black = parse_hex("#000000").unwrap();
    let white = parse_hex("#ffffff").unwrap();
    assert!((contrast_ratio(black, white) - 21.0).abs() < 1e-6);
}

#[test]
fn test_contrast_white_vs_default_text_is_aaa() {
    let white = parse_hex("#ffffff").unwrap();
    let text = parse_hex("#31333f").unwrap();
    let ratio = contrast_ratio(white, text);
    assert!(ratio >= 12.0, "ratio was {}", ratio);
    assert_eq!(WcagLevel::classify(ratio), WcagLevel::Aaa);
}

#[test]
fn test_luminance_ordering() {
    let dark = parse_hex("#0e1117").unwrap();
    let mid = parse_hex("#808080").unwrap();
    let light = parse_hex("#fafafa").unwrap();
    assert!(relative_luminance(dark) < relative_luminance(mid));
    assert!(relative_luminance(mid) < relative_luminance(light));
}

// ============================================================================
// Scheme Generation
// ============================================================================

#[test]
fn test_generated_scheme_is_well_formed() {
    for _ in 0..20 {
        let theme = generate_color_scheme();
        for hex in [
            theme.primary_color.to_hex(),
            theme.background_color.to_hex(),
            theme.secondary_background_color.to_hex(),
            theme.text_color.to_hex(),
        ] {
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}

#[test]
fn test_generated_scheme_honors_lightness_margin() {
    use theme_colors::constants::generator::MIN_PRIMARY_BG_LIGHTNESS_MARGIN;

    for seed in 0..500 {
        let theme = SchemeGenerator::from_seed(seed).generate();
        let primary_l = theme.primary_color.to_hls().l;
        let bg_l = theme.background_color.to_hls().l;
        assert!(
            primary_l.abs_diff(bg_l) >= MIN_PRIMARY_BG_LIGHTNESS_MARGIN,
            "seed {}: primary L {} vs background L {}",
            seed,
            primary_l,
            bg_l
        );
    }
}

#[test]
fn test_generated_text_passes_aa_against_background() {
    for seed in 0..200 {
        let theme = SchemeGenerator::from_seed(seed).generate();
        let ratio = contrast_ratio(theme.text_color, theme.background_color);
        assert!(
            WcagLevel::classify(ratio).passes_aa(),
            "seed {}: text/background ratio {} too low",
            seed,
            ratio
        );
    }
}

// ============================================================================
// Theme Emission and Config Loading
// ============================================================================

#[test]
fn test_emitted_config_parses_back() {
    let theme = SchemeGenerator::from_seed(7).generate();
    let snippet = theme.to_config_toml();
    let config = ThemeConfig::from_toml_str(&snippet).unwrap();
    assert_eq!(config.theme_color(), Some(theme));
}

#[test]
fn test_config_without_theme_is_absent_not_error() {
    let config = ThemeConfig::from_toml_str("[server]\nheadless = true\n").unwrap();
    assert!(config.theme_color().is_none());
}

#[test]
fn test_config_with_bad_hex_is_error() {
    let result = ThemeConfig::from_toml_str(
        "[theme]\nprimaryColor=\"#ff4b4\"\nbackgroundColor=\"#ffffff\"\nsecondaryBackgroundColor=\"#f0f2f6\"\ntextColor=\"#31333f\"\n",
    );
    assert!(matches!(result, Err(ThemeError::ConfigError { .. })));
}

#[test]
fn test_theme_json_round_trip() {
    let theme = ThemeColor::default_dark();
    let json = serde_json::to_string(&theme).unwrap();

    assert!(json.contains("\"primaryColor\""));
    assert!(json.contains("\"backgroundColor\""));
    assert!(json.contains("\"secondaryBackgroundColor\""));
    assert!(json.contains("\"textColor\""));

    let back: ThemeColor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, theme);
}
