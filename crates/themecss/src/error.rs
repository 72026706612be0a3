//! Error types for theme loading and stylesheet generation.
//!
//! Generation itself has exactly one failure mode, [`ThemeError::InvalidTheme`].
//! The remaining variants come from reading theme documents off disk or out of
//! JSON/YAML text.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a theme or generating CSS from it.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme is missing, or its theme object lacks a `light` or `dark` map.
    #[error("Invalid theme styles: missing light or dark mode")]
    InvalidTheme,

    /// A theme document could not be deserialized.
    #[error("failed to parse {format} theme: {message}")]
    Parse {
        /// Document format, `"json"` or `"yaml"`.
        format: &'static str,
        /// Message from the underlying deserializer.
        message: String,
    },

    /// A theme file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file extension is not one of the recognized formats.
    #[error("unsupported theme file '{}' (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Generated CSS could not be tokenized back into variables.
    #[error("CSS parse error at line {line}, column {column}")]
    Css { line: u32, column: u32 },
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::Parse {
            format: "json",
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Parse {
            format: "yaml",
            message: err.to_string(),
        }
    }
}

/// Result type for themecss operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
