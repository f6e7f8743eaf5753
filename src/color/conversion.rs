//! Hex parsing/formatting and RGB ↔ HLS conversion
//!
//! Two conversion layers are exposed on purpose:
//!
//! - `*_unit` functions work on unit-interval floats (hue in turns) and
//!   round-trip within floating-point tolerance.
//! - [`rgb_to_hls`] / [`hls_to_rgb`] go through the integer degree/percent
//!   representation that UI sliders display. The rounding there makes
//!   hex → HLS → hex lossy, and that loss is contractual: reconstructing a
//!   color from slider values must match exactly what the sliders show.

use palette::{FromColor, Hsl, Srgb};

use crate::error::{Result, ThemeError};
use crate::{Hls, Rgb};

/// Parse a strict `#rrggbb` hex color string.
///
/// Accepts exactly 7 characters: a leading `#` followed by 6 hex digits
/// (either case). No whitespace trimming, no 3-digit shorthand, no alpha.
///
/// # Errors
///
/// Returns [`ThemeError::FormatError`] on any malformed input; callers are
/// expected to keep their previous valid color state in that case.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    if hex.len() != 7 {
        return Err(ThemeError::format(
            hex,
            format!("expected 7 characters, got {}", hex.len()),
        ));
    }
    if !hex.starts_with('#') {
        return Err(ThemeError::format(hex, "missing leading '#'"));
    }
    if !hex[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ThemeError::format(hex, "non-hex digit after '#'"));
    }

    // Validated above; from_str_radix cannot fail on pure hex-digit pairs.
    let r = u8::from_str_radix(&hex[1..3], 16).map_err(|e| ThemeError::format(hex, e.to_string()))?;
    let g = u8::from_str_radix(&hex[3..5], 16).map_err(|e| ThemeError::format(hex, e.to_string()))?;
    let b = u8::from_str_radix(&hex[5..7], 16).map_err(|e| ThemeError::format(hex, e.to_string()))?;

    Ok(Rgb::new(r, g, b))
}

/// Format a color as a lowercase, zero-padded `#rrggbb` string.
///
/// Exact inverse of [`parse_hex`] for lowercase input:
/// `format_hex(parse_hex(s)?) == s` whenever `s` is already lowercase.
pub fn format_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert unit-interval RGB to unit-interval HLS.
///
/// Inputs are channel fractions in `[0, 1]`; the result is
/// `(hue, lightness, saturation)` with hue in `[0, 1)` turns and the other
/// two in `[0, 1]`. No rounding is applied, so
/// [`hls_to_rgb_unit`]`(`[`rgb_to_hls_unit`]`(r, g, b))` reproduces the
/// input within floating-point tolerance.
pub fn rgb_to_hls_unit(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let hsl = Hsl::from_color(Srgb::new(r, g, b));
    let h = hsl.hue.into_positive_degrees() / 360.0;
    (h, hsl.lightness, hsl.saturation)
}

/// Convert unit-interval HLS back to unit-interval RGB.
///
/// Hue is in `[0, 1)` turns (values outside wrap), lightness and saturation
/// in `[0, 1]`. Channels are clamped into gamut.
pub fn hls_to_rgb_unit(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    let rgb = Srgb::from_color(Hsl::new(h * 360.0, s, l));
    (
        rgb.red.clamp(0.0, 1.0),
        rgb.green.clamp(0.0, 1.0),
        rgb.blue.clamp(0.0, 1.0),
    )
}

/// Derive the slider-facing HLS representation of a color.
///
/// Hue is rounded to whole degrees (wrapping so 359.6° becomes 0°, never
/// 360°), lightness and saturation to whole percents.
pub fn rgb_to_hls(rgb: Rgb) -> Hls {
    let (h, l, s) = rgb_to_hls_unit(
        rgb.r as f64 / 255.0,
        rgb.g as f64 / 255.0,
        rgb.b as f64 / 255.0,
    );
    Hls {
        h: ((h * 360.0).round() as u16) % 360,
        l: (l * 100.0).round() as u8,
        s: (s * 100.0).round() as u8,
    }
}

/// Reconstruct a color from slider values.
///
/// Degrees and percents are unscaled to unit intervals, converted, and each
/// channel rounded to the nearest integer in `[0, 255]`.
pub fn hls_to_rgb(hls: Hls) -> Rgb {
    let (r, g, b) = hls_to_rgb_unit(
        hls.h as f64 / 360.0,
        hls.l as f64 / 100.0,
        hls.s as f64 / 100.0,
    );
    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
