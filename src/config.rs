//! Initial theme configuration loading
//!
//! A front-end may start from an existing config file instead of the
//! built-in presets. The file is TOML with an optional `[theme]` table
//! holding the four camelCase hex keys, i.e. exactly the snippet
//! [`ThemeColor::to_config_toml`] emits:
//!
//! ```toml
//! [theme]
//! primaryColor="#ff4b4b"
//! backgroundColor="#ffffff"
//! secondaryBackgroundColor="#f0f2f6"
//! textColor="#31333f"
//! ```
//!
//! A missing file or missing `[theme]` table is a normal absence, not an
//! error. A `[theme]` table that is present but malformed is an error.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ThemeError};
use crate::ThemeColor;

/// Parsed theme configuration document
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// The optional `[theme]` table
    theme: Option<ThemeColor>,
}

impl ThemeConfig {
    /// Parse a TOML configuration document from a string
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ConfigError`] on TOML syntax errors or a
    /// malformed `[theme]` table (including invalid hex values).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ThemeError::config("invalid theme configuration", e))
    }

    /// Load a TOML configuration document from a file
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ConfigError`] if the file exists but cannot be
    /// read or parsed. Use [`load_initial_theme`] when a missing file should
    /// be treated as absence.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ThemeError::config(format!("failed to read {}", path.display()), e))?;
        Self::from_toml_str(&content)
    }

    /// The configured theme, if the document has a `[theme]` table
    pub fn theme_color(&self) -> Option<ThemeColor> {
        self.theme
    }
}

/// Load a starting theme from a config file, if one is configured.
///
/// Returns `Ok(None)` when the file does not exist or has no `[theme]`
/// table; both are normal for a fresh setup.
///
/// # Errors
///
/// Returns [`ThemeError::ConfigError`] only when the file exists but cannot
/// be read or parsed.
pub fn load_initial_theme(path: &Path) -> Result<Option<ThemeColor>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(ThemeConfig::from_toml_file(path)?.theme_color())
}
