use std::io;

use thiserror::Error;

/// Library-wide error type for sarabun operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    EnvVarMissing(String),

    /// Request failed validation and cannot be submitted.
    #[error("{0}")]
    Validation(String),

    /// Gemini API call failed.
    #[error("Gemini API error: {message}")]
    GeminiApi { message: String, status: Option<u16> },

    /// Clipboard operation failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Request file not found at path.
    #[error("Request file not found: {0}")]
    RequestFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }
}
