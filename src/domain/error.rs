use std::io;

use thiserror::Error;

/// Library-wide error type for promptgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The generation endpoint could not be reached or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The generation endpoint returned a body that is not a valid response document.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The response decoded but carried no candidate text.
    #[error("no valid text found in response")]
    EmptyResponse,

    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Serialization(String),

    /// Prompt record store is unreadable or could not be written.
    #[error("Prompt store error: {0}")]
    Store(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Classify the error as an `io::ErrorKind`, e.g. to tell a missing input file from bad data.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::Decode(_) | AppError::EmptyResponse | AppError::Store(_) => {
                io::ErrorKind::InvalidData
            }
            AppError::Serialization(_) | AppError::Transport(_) => io::ErrorKind::Other,
        }
    }
}
