use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacesError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },
    HttpStatusError {
        operation: String,
        status_code: u16,
        message: Option<String>,
    },
    // Failed request whose message is shown to the user as is
    RequestFailed {
        operation: String,
        status_code: Option<u16>,
        message: String,
    },

    // Local validation of a required field
    ValidationError {
        field: String,
        message: String,
    },

    // Identifier that should have been derivable from the page path
    MissingIdentifier {
        identifier: String,
        source: String,
    },

    ParseError {
        content_type: String,
        reason: String,
    },

    SystemError {
        operation: String,
        reason: String,
    },
}

impl SpacesError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn validation_error(field: &str, message: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn missing_identifier(identifier: &str, source: &str) -> Self {
        Self::MissingIdentifier {
            identifier: identifier.to_string(),
            source: source.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn from_api(operation: &str, error: &ApiError) -> Self {
        match error {
            ApiError::Status { status, message } => Self::HttpStatusError {
                operation: operation.to_string(),
                status_code: *status,
                message: message.clone(),
            },
            ApiError::Network(reason) => Self::NetworkError {
                operation: operation.to_string(),
                url: None,
                reason: reason.clone(),
            },
            ApiError::Decode(reason) => Self::ParseError {
                content_type: "JSON".to_string(),
                reason: reason.clone(),
            },
        }
    }

    /// Prefers the server's own message over `fallback`.
    pub fn request_failed(operation: &str, fallback: &str, error: &ApiError) -> Self {
        let status_code = match error {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        };
        Self::RequestFailed {
            operation: operation.to_string(),
            status_code,
            message: error.server_message().unwrap_or(fallback).to_string(),
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. }
            | Self::HttpStatusError { .. }
            | Self::RequestFailed { .. }
            | Self::ValidationError { .. }
            | Self::ConfigurationError { .. } => true,
            Self::MissingIdentifier { .. }
            | Self::ConfigurationFileError { .. }
            | Self::ParseError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. }
            | Self::HttpStatusError { .. }
            | Self::RequestFailed { .. }
            | Self::ParseError { .. }
            | Self::MissingIdentifier { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and syntax")
            }
            Self::NetworkError { operation, url, reason } => {
                let mut msg = format!("Network error during {operation}: {reason}");
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                msg.push_str("\n💡 Check that the Spaces server is reachable and try again");
                msg
            }
            Self::HttpStatusError { operation, status_code, message } => {
                let mut msg = format!("{operation} failed with status {status_code}");
                if let Some(message) = message {
                    msg.push_str(&format!(": {message}"));
                }
                if *status_code == 401 {
                    msg.push_str(&format!("\n💡 Set your session cookie in ${}", crate::config::constants::SESSION_COOKIE_ENV));
                }
                msg
            }
            Self::RequestFailed { message, .. } | Self::ValidationError { message, .. } => message.clone(),
            Self::MissingIdentifier { identifier, source } => {
                format!("Could not determine {identifier} from '{source}'")
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {content_type}: {reason}")
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for SpacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SpacesError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

pub type SpacesResult<T> = Result<T, SpacesError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &SpacesError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Re-run the command to try again");
        }
    }
}

impl From<std::io::Error> for SpacesError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SpacesError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SpacesError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for SpacesError {
    fn from(error: toml::ser::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for SpacesError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            reason: error.to_string(),
        }
    }
}

impl From<ApiError> for SpacesError {
    fn from(error: ApiError) -> Self {
        Self::from_api("API request", &error)
    }
}
