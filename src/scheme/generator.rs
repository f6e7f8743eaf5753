//! Harmonious four-color scheme generation
//!
//! The generated bundle keeps one base hue for background, secondary
//! background, and text, and rotates the accent hue into the complementary
//! band. Lightness is what carries legibility: the background picks a light
//! or dark band by coin flip, text takes the opposite extreme with a touch
//! of tint, and the accent sits in the mid range at least
//! [`MIN_PRIMARY_BG_LIGHTNESS_MARGIN`] points away from the background.
//!
//! All sampled triples pass through the integer [`Hls`] slider path before
//! becoming hex colors, so a generated theme looks identical to one dialed
//! in by hand on the sliders.
//!
//! [`MIN_PRIMARY_BG_LIGHTNESS_MARGIN`]: crate::constants::generator::MIN_PRIMARY_BG_LIGHTNESS_MARGIN

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::constants::generator::*;
use crate::{Hls, ThemeColor};

/// Random scheme generator over an arbitrary RNG.
///
/// Use [`SchemeGenerator::new`] for a thread-local RNG, or
/// [`SchemeGenerator::from_seed`] when reproducibility matters (tests,
/// shareable "random" themes).
pub struct SchemeGenerator<R: Rng> {
    rng: R,
}

impl SchemeGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local RNG
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for SchemeGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeGenerator<StdRng> {
    /// Create a deterministic generator from a seed
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SchemeGenerator<R> {
    /// Create a generator backed by the given RNG
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a four-color theme.
    ///
    /// Never fails: every sample is drawn from a fixed range and the accent
    /// lightness guard clamps rather than resamples.
    pub fn generate(&mut self) -> ThemeColor {
        let base_hue: u16 = self.rng.random_range(0..360);
        let light_theme = self.rng.random_bool(0.5);

        let (bg_lo, bg_hi) = if light_theme {
            LIGHT_BG_LIGHTNESS
        } else {
            DARK_BG_LIGHTNESS
        };
        let bg_lightness = self.rng.random_range(bg_lo..=bg_hi);
        let bg_saturation = self.rng.random_range(BG_SATURATION.0..=BG_SATURATION.1);
        let background = Hls::new(base_hue, bg_lightness, bg_saturation).to_rgb();

        // Secondary background moves away from the 50% midpoint so it stays
        // a subtly distinguishable panel against the main background.
        let offset = self
            .rng
            .random_range(SECONDARY_BG_OFFSET.0..=SECONDARY_BG_OFFSET.1);
        let secondary_lightness = if light_theme {
            (bg_lightness + offset).min(100)
        } else {
            bg_lightness.saturating_sub(offset)
        };
        let secondary_background =
            Hls::new(base_hue, secondary_lightness, bg_saturation).to_rgb();

        let (text_lo, text_hi) = if light_theme {
            TEXT_LIGHTNESS_ON_LIGHT
        } else {
            TEXT_LIGHTNESS_ON_DARK
        };
        let text_lightness = self.rng.random_range(text_lo..=text_hi);
        let text_saturation = self.rng.random_range(TEXT_SATURATION.0..=TEXT_SATURATION.1);
        let text = Hls::new(base_hue, text_lightness, text_saturation).to_rgb();

        let rotation = self
            .rng
            .random_range(ACCENT_HUE_ROTATION.0..=ACCENT_HUE_ROTATION.1);
        let accent_hue = (base_hue + rotation) % 360;
        let accent_saturation = self
            .rng
            .random_range(ACCENT_SATURATION.0..=ACCENT_SATURATION.1);
        let mut accent_lightness = self
            .rng
            .random_range(ACCENT_LIGHTNESS.0..=ACCENT_LIGHTNESS.1);

        // Lightness guard: an accent too close to the background would be
        // illegible. Clamp to the nearest acceptable boundary instead of
        // resampling, keeping generation total.
        if accent_lightness.abs_diff(bg_lightness) < MIN_PRIMARY_BG_LIGHTNESS_MARGIN {
            accent_lightness = if light_theme {
                bg_lightness - MIN_PRIMARY_BG_LIGHTNESS_MARGIN
            } else {
                bg_lightness + MIN_PRIMARY_BG_LIGHTNESS_MARGIN
            };
        }
        let primary = Hls::new(accent_hue, accent_lightness, accent_saturation).to_rgb();

        ThemeColor {
            primary_color: primary,
            background_color: background,
            secondary_background_color: secondary_background,
            text_color: text,
        }
    }
}

/// Generate a random color scheme with the thread-local RNG.
///
/// Convenience front door for a configurator's "randomize" button.
pub fn generate_color_scheme() -> ThemeColor {
    SchemeGenerator::new().generate()
}
