//! Helper functions for creating specific error types

use super::types::AttacherError;

impl AttacherError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn store<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Store {
            status,
            message: message.into(),
        }
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        Self::InvalidUrl(message.into())
    }

    /// Whether the error came from the HTTP layer rather than from a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpClient(_) | Self::Network(_))
    }
}
