use std::io;

use thiserror::Error;

/// Library-wide error type for authseed operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file failed validation after parsing.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML serialization error while writing a manifest back.
    #[error("Failed to serialize {path}: {details}")]
    YamlSerialize { path: String, details: String },

    /// Default template missing from the embedded catalog.
    #[error("Default template '{0}' not found")]
    TemplateNotFound(String),

    /// Default template could not be rendered.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// The operating system could not supply secure randomness.
    #[error("Secure randomness source unavailable: {0}")]
    EntropyUnavailable(String),

    /// A secret was requested with an unusable length.
    #[error("Invalid secret length {0}: must be between 1 and 4096 bytes")]
    InvalidSecretLength(usize),

    /// Path escapes the repository root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Interactive prompt failed (e.g. terminal unavailable).
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Invariant violated inside authseed itself.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidSecretLength(_)
            | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::YamlSerialize { .. } | AppError::TemplateRender { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::EntropyUnavailable(_) | AppError::Prompt(_) | AppError::Internal(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
