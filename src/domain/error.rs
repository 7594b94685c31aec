use std::io;

use thiserror::Error;

/// Library-wide error type for angle-prompts operations.
///
/// The translators themselves never fail; these cover configuration and CLI input.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Explicitly requested settings file does not exist.
    #[error("Settings file not found: {0}")]
    ConfigMissing(String),

    /// Distance layer name is invalid.
    #[error("Invalid layer '{name}': must be one of close-up, medium, wide")]
    InvalidLayer { name: String },

    /// Point triple is malformed.
    #[error("Invalid point '{0}': expected AZIMUTH,ELEVATION,DISTANCE integers")]
    InvalidPoint(String),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    /// Map onto the closest `io::ErrorKind`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidLayer { .. }
            | AppError::InvalidPoint(_)
            | AppError::Json(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
        }
    }
}
