//! Together AI API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::error::{ApiError, Error, Result};

use super::config::TogetherConfig;
use super::types::ErrorResponse;

/// Together AI API client.
///
/// Cheap to clone; the configuration is shared behind an `Arc` and the
/// underlying HTTP client pools connections.
#[derive(Debug, Clone)]
pub struct Together {
    pub(crate) config: Arc<TogetherConfig>,
    pub(crate) client: Client,
}

impl Together {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be built.
    pub fn new(config: TogetherConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build()?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOGETHER_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(TogetherConfig::from_env()?)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the chat completions URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build request headers for JSON requests.
    pub(crate) fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
    }

    /// Parse an error response body.
    ///
    /// Prefers the structured `{"error": {...}}` envelope; falls back to
    /// the raw body text when the envelope does not parse.
    pub(crate) fn parse_error(status: u16, body: &str) -> ApiError {
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            let error = parsed.error;
            let code = error.code.or(error.error_type);
            return ApiError::new(status, error.message, code);
        }

        ApiError::new(status, body, None)
    }
}
