//! # Theme Colors
//!
//! A Rust crate providing the core of an interactive color-theme
//! configurator for web-application UIs.
//!
//! This library provides:
//! - Strict `#rrggbb` hex parsing and formatting
//! - RGB ↔ HLS conversion with the integer degree/percent rounding that
//!   UI sliders display
//! - WCAG 2.x relative-luminance and contrast-ratio evaluation
//! - Random generation of harmonious, high-contrast four-color themes
//! - Config-file and command-line snippet emission, plus optional loading
//!   of a starting theme from a TOML config file
//!
//! ## Example
//!
//! ```rust
//! use theme_colors::{contrast_ratio, generate_color_scheme, WcagLevel};
//!
//! let theme = generate_color_scheme();
//! let ratio = contrast_ratio(theme.text_color, theme.background_color);
//! assert!(WcagLevel::classify(ratio).passes_aa());
//! println!("{}", theme.to_config_toml());
//! ```
//!
//! The widget layer above this crate keeps RGB as the only source of truth:
//! every mutation path replaces the whole [`ThemeColor`] and re-derives the
//! HLS slider values, so the two representations can never diverge.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod scheme;
pub mod theme;

pub use color::{
    contrast_ratio, format_hex, hls_to_rgb, parse_hex, relative_luminance, rgb_to_hls, Hls, Rgb,
    WcagLevel,
};
pub use config::{load_initial_theme, ThemeConfig};
pub use error::{Result, ThemeError};
pub use scheme::{generate_color_scheme, SchemeGenerator};
pub use theme::{ContrastPair, ThemeColor};
