use std::io;

use thiserror::Error;

/// Library-wide error type for envup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// conda execution failed.
    #[error("conda error running '{command}': {details}")]
    CondaError { command: String, details: String },

    /// pip execution failed.
    #[error("pip error running '{command}': {details}")]
    PipError { command: String, details: String },

    /// Python interpreter execution failed.
    #[error("python error running '{command}': {details}")]
    PythonError { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
