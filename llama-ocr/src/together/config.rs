//! Together AI client configuration.

use crate::error::{Error, Result};

/// Configuration for the Together AI client.
#[derive(Debug, Clone)]
pub struct TogetherConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds. `None` leaves the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl TogetherConfig {
    /// Default Together API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.together.xyz/v1";

    /// Creates a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: None,
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads from:
    /// - `TOGETHER_API_KEY` - Required API key
    /// - `TOGETHER_BASE_URL` - Optional base URL
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if `TOGETHER_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TOGETHER_API_KEY").map_err(|_| Error::MissingApiKey)?;

        let base_url = std::env::var("TOGETHER_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_owned());

        Ok(Self {
            api_key,
            base_url,
            timeout_secs: None,
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}
