use serde::Deserialize;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    /// The API answered with its own `error_message`.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match api_error_message(body) {
            Some(message) => AppError::Api { status, message },
            None => AppError::Http {
                status,
                message: sanitize_body(body),
            },
        }
    }

    /// Message supplied by the API, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } | AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error_message: Option<String>,
}

/// Extracts `error_message` from a JSON error body, ignoring blank values.
fn api_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    let message = parsed.error_message?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
