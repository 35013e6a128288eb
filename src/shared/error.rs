use std::fmt;

/// Message used when the backend cannot be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Tidak dapat terhubung ke server";

#[derive(Debug)]
pub enum AppError {
    /// Transport failure before any HTTP status was received.
    Network(String),
    /// Non-2xx response. `message` is the server's `error` field or the
    /// endpoint's fallback text and is displayed verbatim.
    Api { status: u16, message: String },
    /// No usable session (missing or expired token) on the client side.
    Unauthorized(String),
    NotFound(String),
    InvalidInput(String),
    ConfigurationError(String),
    SerializationError(String),
    DeserializationError(String),
    Internal(String),
}

impl AppError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        AppError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the error means the current token is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_)) || self.status() == Some(401)
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Network(_) => "network_error",
            AppError::Api { status: 401, .. } | AppError::Unauthorized(_) => "unauthorized",
            AppError::Api { status: 403, .. } => "forbidden",
            AppError::Api { status: 404, .. } | AppError::NotFound(_) => "not_found",
            AppError::Api { .. } => "api_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::ConfigurationError(_) => "configuration_error",
            AppError::SerializationError(_) => "serialization_error",
            AppError::DeserializationError(_) => "deserialization_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Text suitable for an inline banner in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::SerializationError(_)
            | AppError::DeserializationError(_)
            | AppError::Internal(_) => "Terjadi kesalahan pada aplikasi".to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "{}", msg),
            AppError::Api { message, .. } => write!(f, "{}", message),
            AppError::Unauthorized(msg) => write!(f, "{}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::InvalidInput(msg) => write!(f, "{}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::debug!(error = %err, "http transport error");
        AppError::Network(NETWORK_ERROR_MESSAGE.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DeserializationError(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Internal(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
