//! Chat completion requests.

use tracing::debug;

use crate::error::{Error, Result};

use super::client::Together;
use super::types::{ChatRequest, ChatResponse};

impl Together {
    /// Send a chat completion request and return the first choice's text
    /// content.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send, the API reports a
    /// non-success status, or the response carries no choices.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let url = self.chat_url();
        debug!(model = %request.model, "sending chat completion request");

        let response = self.build_request(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status.as_u16(), &body).into());
        }

        let text = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            Error::unexpected_response(format!("parse error: {e}, response: {text}"))
        })?;

        Self::extract_content(parsed)
    }

    /// Pull the first choice's text content out of a parsed response.
    ///
    /// A choice without content yields an empty string; a response without
    /// choices is an error.
    pub(crate) fn extract_content(response: ChatResponse) -> Result<String> {
        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "completion usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::unexpected_response("empty choices"))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
