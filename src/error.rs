/// Error types for meeting-clerk
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid AI task type")]
    InvalidTaskType,

    #[error("Missing or malformed Authorization header")]
    MissingCredential,

    #[error("Credential rejected by the auth service")]
    InvalidCredential,

    #[error("Meeting id is required")]
    MissingIdentifier,

    #[error("Method not allowed")]
    MethodNotSupported,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream service failed: {body}")]
    UpstreamUnavailable { status: Option<u16>, body: String },

    #[error("Upstream response did not contain the expected candidate text")]
    MalformedUpstreamEnvelope,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status class for surfacing this error at the transport boundary.
    pub fn status(&self) -> u16 {
        match self {
            AppError::InvalidTaskType | AppError::MissingIdentifier => 400,
            AppError::MissingCredential | AppError::InvalidCredential => 401,
            AppError::NotFound(_) => 404,
            AppError::MethodNotSupported => 405,
            AppError::UpstreamUnavailable { .. } | AppError::MalformedUpstreamEnvelope => 502,
            _ => 500,
        }
    }

    /// Diagnostic detail for the error body, where one exists.
    ///
    /// Upstream status and raw body are preserved for debugging; credentials
    /// never appear here because they are never stored on an error.
    pub fn details(&self) -> Option<String> {
        match self {
            AppError::UpstreamUnavailable { status, body } => Some(match status {
                Some(code) => format!("Status {}: {}", code, body),
                None => body.clone(),
            }),
            AppError::Database(e) => Some(e.to_string()),
            AppError::Http(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
