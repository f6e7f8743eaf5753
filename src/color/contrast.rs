//! WCAG 2.x relative luminance and contrast ratio
//!
//! The linearization constants here (0.03928 threshold, 2.4 exponent,
//! 0.2126/0.7152/0.0722 weights) are taken verbatim from the WCAG 2.x
//! definition and live in [`crate::constants::wcag`]; they are not tunable.

use std::fmt;

use crate::constants::wcag;
use crate::Rgb;

/// Compute the WCAG relative luminance of a color.
///
/// Each channel is gamma-expanded with the sRGB piecewise function, then the
/// three linear channels are combined with the standard luminance weights.
/// The result is in `[0, 1]`: 0.0 for black, 1.0 for white.
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = |v: u8| -> f64 {
        let c = v as f64 / 255.0;
        if c <= wcag::LINEAR_THRESHOLD {
            c / wcag::LINEAR_DIVISOR
        } else {
            ((c + wcag::GAMMA_OFFSET) / (1.0 + wcag::GAMMA_OFFSET)).powf(wcag::GAMMA_EXPONENT)
        }
    };

    wcag::WEIGHT_RED * linear(color.r)
        + wcag::WEIGHT_GREEN * linear(color.g)
        + wcag::WEIGHT_BLUE * linear(color.b)
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Defined as `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter luminance.
/// The ratio is symmetric in its arguments and always in `[1.0, 21.0]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + wcag::LUMINANCE_OFFSET) / (darker + wcag::LUMINANCE_OFFSET)
}

/// WCAG conformance classification of a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    /// Ratio >= 7.0: passes AAA for normal text
    Aaa,
    /// Ratio >= 4.5: passes AA for normal text
    Aa,
    /// Ratio >= 3.0: passes AA for large text only
    AaLargeText,
    /// Ratio below 3.0: fails all levels
    Fail,
}

impl WcagLevel {
    /// Classify a contrast ratio against the fixed WCAG 2.x thresholds
    pub fn classify(ratio: f64) -> Self {
        if ratio >= wcag::AAA_NORMAL {
            WcagLevel::Aaa
        } else if ratio >= wcag::AA_NORMAL {
            WcagLevel::Aa
        } else if ratio >= wcag::AA_LARGE {
            WcagLevel::AaLargeText
        } else {
            WcagLevel::Fail
        }
    }

    /// Whether this level satisfies AA for normal text
    pub fn passes_aa(self) -> bool {
        matches!(self, WcagLevel::Aaa | WcagLevel::Aa)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLargeText => "AA (large text only)",
            WcagLevel::Fail => "fail",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn test_luminance_extremes() {
        assert!(relative_luminance(BLACK).abs() < 1e-12);
        assert!((relative_luminance(WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_green_dominates() {
        let lum_r = relative_luminance(Rgb::new(255, 0, 0));
        let lum_g = relative_luminance(Rgb::new(0, 255, 0));
        let lum_b = relative_luminance(Rgb::new(0, 0, 255));
        assert!(lum_g > lum_r);
        assert!(lum_r > lum_b);
    }

    #[test]
    fn test_contrast_black_white_is_21() {
        assert!((contrast_ratio(BLACK, WHITE) - 21.0).abs() < 1e-6);
    }

    #[test]
    fn test_contrast_self_is_one() {
        let color = Rgb::new(0x31, 0x33, 0x3f);
        assert!((contrast_ratio(color, color) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_symmetric() {
        let a = Rgb::new(255, 75, 75);
        let b = Rgb::new(0x0e, 0x11, 0x17);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_contrast_at_least_one() {
        let pairs = [
            (Rgb::new(10, 10, 10), Rgb::new(12, 12, 12)),
            (Rgb::new(200, 0, 0), Rgb::new(0, 200, 0)),
        ];
        for (a, b) in pairs {
            assert!(contrast_ratio(a, b) >= 1.0);
        }
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(WcagLevel::classify(21.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::classify(7.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::classify(6.99), WcagLevel::Aa);
        assert_eq!(WcagLevel::classify(4.5), WcagLevel::Aa);
        assert_eq!(WcagLevel::classify(4.49), WcagLevel::AaLargeText);
        assert_eq!(WcagLevel::classify(3.0), WcagLevel::AaLargeText);
        assert_eq!(WcagLevel::classify(2.99), WcagLevel::Fail);
        assert_eq!(WcagLevel::classify(1.0), WcagLevel::Fail);
    }

    #[test]
    fn test_classify_display_labels() {
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!(WcagLevel::AaLargeText.to_string(), "AA (large text only)");
        assert_eq!(WcagLevel::Fail.to_string(), "fail");
    }

    #[test]
    fn test_default_light_text_is_aaa() {
        let ratio = contrast_ratio(Rgb::new(0xff, 0xff, 0xff), Rgb::new(0x31, 0x33, 0x3f));
        assert!(ratio >= 12.0);
        assert_eq!(WcagLevel::classify(ratio), WcagLevel::Aaa);
    }
}
