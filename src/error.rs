//! Error types for the theme_colors library

use thiserror::Error;

/// Result type alias for theme_colors operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Error types for theme configuration operations.
///
/// Only two things can fail in this crate: parsing a malformed hex color
/// string, and reading a theme configuration file. Conversions, contrast
/// evaluation, and scheme generation are total functions.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Hex color string is malformed (wrong length, missing `#`, non-hex digits)
    #[error("invalid hex color {input:?}: {reason}")]
    FormatError { input: String, reason: String },

    /// Theme configuration file could not be read or parsed
    #[error("configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ThemeError {
    /// Create a format error for a rejected hex input
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FormatError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display.
    ///
    /// On a `FormatError` the caller is expected to keep its previous valid
    /// color state and surface this message as a validation hint.
    pub fn user_message(&self) -> String {
        match self {
            ThemeError::FormatError { input, .. } => {
                format!(
                    "{:?} is not a valid color. Use the form #rrggbb, e.g. #ff4b4b.",
                    input
                )
            }
            ThemeError::ConfigError { .. } => {
                "Could not read the theme configuration file. Check its syntax and try again."
                    .to_string()
            }
        }
    }
}
