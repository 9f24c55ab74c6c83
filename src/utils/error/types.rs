//! Error types for the image attacher

use thiserror::Error;

/// Result type alias for the image attacher
pub type Result<T> = std::result::Result<T, AttacherError>;

/// Main error type for the image attacher
#[derive(Error, Debug)]
pub enum AttacherError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Non-success responses from the record store
    #[error("Record store error ({status}): {message}")]
    Store { status: u16, message: String },

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// URL errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for AttacherError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
