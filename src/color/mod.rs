//! Color model and conversion module
//!
//! Defines the two color representations used by the configurator and the
//! conversions between them. [`Rgb`] is the canonical representation; the
//! slider-facing [`Hls`] form is always derived from it on demand, never
//! stored as an independent source of truth.

pub mod contrast;
pub mod conversion;

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::ThemeError;

pub use contrast::{contrast_ratio, relative_luminance, WcagLevel};
pub use conversion::{format_hex, hls_to_rgb, parse_hex, rgb_to_hls};

/// An immutable sRGB color with 8-bit channels.
///
/// Serializes to and from its lowercase `#rrggbb` hex form, which is the
/// external representation everywhere (config files, emitted snippets,
/// picker widgets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` hex string
    pub fn to_hex(self) -> String {
        conversion::format_hex(self)
    }

    /// Derive the rounded slider-facing HLS representation
    pub fn to_hls(self) -> Hls {
        conversion::rgb_to_hls(self)
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        conversion::parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Integer HLS representation as shown on UI sliders.
///
/// Hue in whole degrees `[0, 360)`, lightness and saturation in whole
/// percents `[0, 100]`. Deriving this from [`Rgb`] rounds to these integer
/// steps, so hex → HLS → hex is not an exact round trip. That is the
/// intended behavior: sliders display rounded integers, and reconstructing
/// from them must match what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hls {
    /// Hue in degrees, `[0, 360)`
    pub h: u16,
    /// Lightness in percent, `[0, 100]`
    pub l: u8,
    /// Saturation in percent, `[0, 100]`
    pub s: u8,
}

impl Hls {
    /// Create an HLS triple, wrapping hue into `[0, 360)` and clamping
    /// lightness and saturation to `[0, 100]`.
    pub fn new(h: u16, l: u8, s: u8) -> Self {
        Self {
            h: h % 360,
            l: l.min(100),
            s: s.min(100),
        }
    }

    /// Convert back to the canonical RGB representation
    pub fn to_rgb(self) -> Rgb {
        conversion::hls_to_rgb(self)
    }
}
