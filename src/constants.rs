//! Fixed constants for contrast evaluation and scheme generation
//!
//! WCAG values come straight from the 2.x recommendation and must not be
//! tuned. Generator values are design choices; see DESIGN.md for rationale.

/// WCAG 2.x contrast constants
///
/// Relative luminance and contrast ratio formulas per
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>.
pub mod wcag {
    /// Minimum ratio for AAA conformance (normal text)
    pub const AAA_NORMAL: f64 = 7.0;

    /// Minimum ratio for AA conformance (normal text)
    pub const AA_NORMAL: f64 = 4.5;

    /// Minimum ratio for AA conformance (large text only)
    pub const AA_LARGE: f64 = 3.0;

    /// Offset added to both luminances in the contrast ratio
    pub const LUMINANCE_OFFSET: f64 = 0.05;

    /// Channel values at or below this are linearized by simple division
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor for the linear segment of the sRGB expansion
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and scale for the power segment of the sRGB expansion
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Luminance weights for linearized R, G, B
    pub const WEIGHT_RED: f64 = 0.2126;
    pub const WEIGHT_GREEN: f64 = 0.7152;
    pub const WEIGHT_BLUE: f64 = 0.0722;
}

/// Sampling ranges for random scheme generation
///
/// All lightness/saturation values are integer percents matching the
/// slider-facing [`Hls`](crate::Hls) representation.
pub mod generator {
    /// Background lightness range for light themes
    pub const LIGHT_BG_LIGHTNESS: (u8, u8) = (85, 97);

    /// Background lightness range for dark themes
    pub const DARK_BG_LIGHTNESS: (u8, u8) = (3, 15);

    /// Background saturation range (both modes)
    pub const BG_SATURATION: (u8, u8) = (10, 30);

    /// Text lightness over dark backgrounds (near white)
    pub const TEXT_LIGHTNESS_ON_DARK: (u8, u8) = (88, 98);

    /// Text lightness over light backgrounds (near black)
    pub const TEXT_LIGHTNESS_ON_LIGHT: (u8, u8) = (2, 12);

    /// Text saturation range, a touch of tint instead of pure grayscale
    pub const TEXT_SATURATION: (u8, u8) = (5, 25);

    /// Secondary background lightness offset away from the 50% midpoint
    pub const SECONDARY_BG_OFFSET: (u8, u8) = (3, 6);

    /// Accent hue rotation away from the base hue, in degrees
    pub const ACCENT_HUE_ROTATION: (u16, u16) = (150, 210);

    /// Accent saturation range
    pub const ACCENT_SATURATION: (u8, u8) = (70, 100);

    /// Accent lightness range
    pub const ACCENT_LIGHTNESS: (u8, u8) = (40, 65);

    /// Minimum lightness gap between the accent and the background.
    /// Samples landing closer are clamped to the nearest boundary.
    pub const MIN_PRIMARY_BG_LIGHTNESS_MARGIN: u8 = 20;
}

/// Built-in preset theme colors
pub mod presets {
    use crate::Rgb;

    pub const LIGHT_PRIMARY: Rgb = Rgb::new(0xff, 0x4b, 0x4b);
    pub const LIGHT_BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const LIGHT_SECONDARY_BACKGROUND: Rgb = Rgb::new(0xf0, 0xf2, 0xf6);
    pub const LIGHT_TEXT: Rgb = Rgb::new(0x31, 0x33, 0x3f);

    pub const DARK_PRIMARY: Rgb = Rgb::new(0xff, 0x4b, 0x4b);
    pub const DARK_BACKGROUND: Rgb = Rgb::new(0x0e, 0x11, 0x17);
    pub const DARK_SECONDARY_BACKGROUND: Rgb = Rgb::new(0x26, 0x27, 0x30);
    pub const DARK_TEXT: Rgb = Rgb::new(0xfa, 0xfa, 0xfa);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wcag_thresholds_ordered() {
        assert!(wcag::AA_LARGE < wcag::AA_NORMAL);
        assert!(wcag::AA_NORMAL < wcag::AAA_NORMAL);
    }

    #[test]
    fn test_luminance_weights_sum_to_one() {
        let sum = wcag::WEIGHT_RED + wcag::WEIGHT_GREEN + wcag::WEIGHT_BLUE;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_generator_ranges_sane() {
        assert!(generator::LIGHT_BG_LIGHTNESS.0 <= generator::LIGHT_BG_LIGHTNESS.1);
        assert!(generator::DARK_BG_LIGHTNESS.1 < generator::LIGHT_BG_LIGHTNESS.0);
        assert!(generator::ACCENT_LIGHTNESS.0 >= generator::DARK_BG_LIGHTNESS.1);
        assert!(generator::ACCENT_LIGHTNESS.1 <= generator::LIGHT_BG_LIGHTNESS.0);
    }

    #[test]
    fn test_margin_reachable_from_accent_range() {
        // The accent lightness band must leave room for the margin clamp on
        // both light and dark backgrounds.
        let margin = generator::MIN_PRIMARY_BG_LIGHTNESS_MARGIN;
        assert!(generator::LIGHT_BG_LIGHTNESS.0 - generator::ACCENT_LIGHTNESS.1 >= margin);
        assert!(generator::ACCENT_LIGHTNESS.0 - generator::DARK_BG_LIGHTNESS.1 >= margin);
    }
}
