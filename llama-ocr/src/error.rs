//! Unified error types for llama-ocr.
//!
//! Everything that can go wrong between "here is an image" and "here is
//! Markdown" surfaces as [`Error`]: a missing credential, an unreadable
//! file, a transport failure, or an error reported by the API itself.

use std::fmt;

/// Result type alias for llama-ocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for llama-ocr.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No API key was available from any source.
    #[error("API key not provided. Pass one explicitly or set TOGETHER_API_KEY")]
    MissingApiKey,

    /// A model name that does not match any known vision model.
    #[error("unknown model '{0}' (expected Llama-3.2-90B-Vision, Llama-3.2-11B-Vision, or free)")]
    InvalidModel(String),

    /// I/O error, typically while reading a local image file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error status reported by the API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A successful status with a body the client could not use.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Configuration store error.
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl Error {
    /// Create an unexpected response error with a message.
    #[must_use]
    pub fn unexpected_response(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }
}

/// Error payload for a non-success status from the API.
///
/// Carries the HTTP status together with the server-reported message. When
/// the body is not the structured `{"error": {...}}` envelope, `message`
/// holds the raw body text.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Error message reported by the server.
    pub message: String,
    /// Provider error code, when the body included one.
    pub code: Option<String>,
}

impl ApiError {
    /// Create an API error.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>, code: Option<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code,
        }
    }

    /// Check whether the status indicates an authentication failure.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check whether the status indicates rate limiting.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code: {code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
