use thiserror::Error;

/// Failure of a single request against the Spaces backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network Error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },

    #[error("Decode Error: {0}")]
    Decode(String),
}

impl ApiError {
    pub const fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Server supplied message, if the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}
