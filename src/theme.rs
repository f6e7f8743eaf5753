//! The four-color theme bundle and its text emitters
//!
//! A [`ThemeColor`] is the unit of state the configurator works with: any
//! user action produces a whole new bundle rather than mutating one slot, so
//! the RGB and derived HLS views can never diverge mid-update.

use serde::{Deserialize, Serialize};

use crate::color::contrast::{contrast_ratio, WcagLevel};
use crate::constants::presets;
use crate::Rgb;

/// A named bundle of the four theme colors.
///
/// Field names follow Rust convention; the serde representation uses the
/// external camelCase keys (`primaryColor`, `backgroundColor`,
/// `secondaryBackgroundColor`, `textColor`) with hex-string values, matching
/// the emitted config snippet exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColor {
    /// Accent color for interactive elements
    pub primary_color: Rgb,
    /// Main page background
    pub background_color: Rgb,
    /// Panel/sidebar background, subtly offset from the main background
    pub secondary_background_color: Rgb,
    /// Body text color
    pub text_color: Rgb,
}

/// Contrast evaluation for one notable color pair of a theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastPair {
    /// Which pair this is, e.g. "Text/Background"
    pub label: &'static str,
    /// WCAG contrast ratio, in `[1.0, 21.0]`
    pub ratio: f64,
    /// Conformance classification of the ratio
    pub level: WcagLevel,
}

impl ThemeColor {
    /// The built-in "Default light" preset
    pub const fn default_light() -> Self {
        Self {
            primary_color: presets::LIGHT_PRIMARY,
            background_color: presets::LIGHT_BACKGROUND,
            secondary_background_color: presets::LIGHT_SECONDARY_BACKGROUND,
            text_color: presets::LIGHT_TEXT,
        }
    }

    /// The built-in "Default dark" preset
    pub const fn default_dark() -> Self {
        Self {
            primary_color: presets::DARK_PRIMARY,
            background_color: presets::DARK_BACKGROUND,
            secondary_background_color: presets::DARK_SECONDARY_BACKGROUND,
            text_color: presets::DARK_TEXT,
        }
    }

    /// Named preset list for front-ends to offer as starting points
    pub fn presets() -> Vec<(&'static str, ThemeColor)> {
        vec![
            ("Default light", Self::default_light()),
            ("Default dark", Self::default_dark()),
        ]
    }

    /// Emit the theme as a config-file snippet.
    ///
    /// ```text
    /// [theme]
    /// primaryColor="#ff4b4b"
    /// backgroundColor="#ffffff"
    /// secondaryBackgroundColor="#f0f2f6"
    /// textColor="#31333f"
    /// ```
    pub fn to_config_toml(&self) -> String {
        format!(
            "[theme]\n\
             primaryColor=\"{}\"\n\
             backgroundColor=\"{}\"\n\
             secondaryBackgroundColor=\"{}\"\n\
             textColor=\"{}\"\n",
            self.primary_color,
            self.background_color,
            self.secondary_background_color,
            self.text_color,
        )
    }

    /// Emit the theme as command-line flags for the given command.
    ///
    /// Produces a multi-line invocation with `--theme.<key>` flags and
    /// backslash line continuations.
    pub fn to_cli_args(&self, command: &str) -> String {
        format!(
            "{} \\\n    --theme.primaryColor=\"{}\" \\\n    --theme.backgroundColor=\"{}\" \\\n    --theme.secondaryBackgroundColor=\"{}\" \\\n    --theme.textColor=\"{}\"\n",
            command,
            self.primary_color,
            self.background_color,
            self.secondary_background_color,
            self.text_color,
        )
    }

    /// Evaluate the four color pairs the configurator reports on:
    /// primary and text, each against both backgrounds.
    pub fn contrast_report(&self) -> Vec<ContrastPair> {
        let pair = |label, a, b| {
            let ratio = contrast_ratio(a, b);
            ContrastPair {
                label,
                ratio,
                level: WcagLevel::classify(ratio),
            }
        };
        vec![
            pair(
                "Primary/Background",
                self.primary_color,
                self.background_color,
            ),
            pair(
                "Primary/Secondary background",
                self.primary_color,
                self.secondary_background_color,
            ),
            pair("Text/Background", self.text_color, self.background_color),
            pair(
                "Text/Secondary background",
                self.text_color,
                self.secondary_background_color,
            ),
        ]
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::default_light()
    }
}
