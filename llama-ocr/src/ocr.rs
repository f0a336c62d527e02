//! OCR request building and execution.
//!
//! [`ocr`] is the main entry point: one image in, Markdown out. The image
//! and a fixed extraction instruction travel as a single user message to a
//! vision model's chat completions endpoint.

use tracing::debug;

use crate::error::{Error, Result};
use crate::image::ImageSource;
use crate::model::VisionModel;
use crate::together::{ChatMessage, ChatRequest, ContentPart, Together, TogetherConfig};

/// Instruction sent alongside the image.
const EXTRACTION_PROMPT: &str = "\
Convert the provided image into Markdown format. Ensure that all content from the page is included, such as headers, footers, subtexts, images (with alt text if possible), tables, and any other elements.

Requirements:

- Output Only Markdown: Return solely the Markdown content without any additional explanations or comments.
- No Delimiters: Do not use code fences or delimiters like ```markdown.
- Complete Content: Do not omit any part of the page, including headers, footers, and subtext.";

/// A request to extract Markdown from one image.
///
/// # Example
///
/// ```rust,ignore
/// use llama_ocr::{OcrRequest, VisionModel, ocr};
///
/// let markdown = ocr(
///     OcrRequest::new("./receipt.jpg").with_model(VisionModel::Free),
/// )
/// .await?;
/// ```
#[derive(Debug, Clone)]
pub struct OcrRequest {
    /// Local path or remote `http(s)` URL of the image.
    pub file_path: String,
    /// Explicit API key; falls back to `TOGETHER_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Model to run the extraction with.
    pub model: VisionModel,
}

impl OcrRequest {
    /// Create a request for the given image with default settings.
    #[must_use]
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            api_key: None,
            model: VisionModel::default(),
        }
    }

    /// Sets an explicit API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the model.
    #[must_use]
    pub const fn with_model(mut self, model: VisionModel) -> Self {
        self.model = model;
        self
    }
}

/// Convert a single image into Markdown.
///
/// The image may be a local file or a remote `http(s)` URL. Local files are
/// read and inlined as base64 data URLs; remote URLs are passed to the API
/// as-is. The key comes from the request or, failing that, from the
/// `TOGETHER_API_KEY` environment variable; `TOGETHER_BASE_URL` overrides
/// the endpoint.
///
/// # Errors
///
/// Returns an error if no API key is available, the image file cannot be
/// read, or the API call fails.
pub async fn ocr(request: OcrRequest) -> Result<String> {
    let api_key = request
        .api_key
        .or_else(|| std::env::var("TOGETHER_API_KEY").ok())
        .filter(|key| !key.is_empty())
        .ok_or(Error::MissingApiKey)?;

    let mut config = TogetherConfig::new(api_key);
    if let Ok(base_url) = std::env::var("TOGETHER_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let client = Together::new(config)?;

    ocr_with_client(&client, &request.file_path, request.model).await
}

/// Run an extraction against an existing client.
///
/// Lets callers reuse one client (and its connection pool) across several
/// images, or point the call at a non-default endpoint.
///
/// # Errors
///
/// Returns an error if the image file cannot be read or the API call fails.
pub async fn ocr_with_client(
    client: &Together,
    file_path: &str,
    model: VisionModel,
) -> Result<String> {
    let source = ImageSource::parse(file_path);
    debug!(model = %model, remote = source.is_remote(), "running OCR");

    let image_url = source.to_api_url().await?;
    client.chat(&build_request(model, image_url)).await
}

/// Build the chat request: one user message, prompt first, then the image.
fn build_request(model: VisionModel, image_url: String) -> ChatRequest {
    let message = ChatMessage::user(vec![
        ContentPart::text(EXTRACTION_PROMPT),
        ContentPart::image_url(image_url),
    ]);

    ChatRequest::new(model.model_id(), vec![message])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_defaults() {
        let request = OcrRequest::new("./page.png");
        assert_eq!(request.file_path, "./page.png");
        assert!(request.api_key.is_none());
        assert_eq!(request.model, VisionModel::HighRes);
    }

    #[test]
    fn request_builder_overrides() {
        let request = OcrRequest::new("a.jpg")
            .with_api_key("sk-test")
            .with_model(VisionModel::Free);

        assert_eq!(request.api_key.as_deref(), Some("sk-test"));
        assert_eq!(request.model, VisionModel::Free);
    }

    #[test]
    fn chat_request_has_prompt_then_image() {
        let request = build_request(
            VisionModel::Free,
            "data:image/jpeg;base64,AQID".to_owned(),
        );

        assert_eq!(request.model, "meta-llama/Llama-Vision-Free");
        assert_eq!(request.messages.len(), 1);

        let message = &request.messages[0];
        assert_eq!(message.role, "user");
        assert_eq!(message.content.len(), 2);
        assert!(matches!(
            &message.content[0],
            ContentPart::Text { text } if text.contains("Markdown format")
        ));
        assert!(matches!(
            &message.content[1],
            ContentPart::ImageUrl { image_url } if image_url.url == "data:image/jpeg;base64,AQID"
        ));
    }

    #[test]
    fn prompt_forbids_code_fences() {
        assert!(EXTRACTION_PROMPT.contains("No Delimiters"));
        assert!(EXTRACTION_PROMPT.contains("```markdown"));
        assert!(EXTRACTION_PROMPT.contains("Complete Content"));
    }

    #[test]
    fn chat_request_sets_no_sampling_knobs() {
        let request = build_request(VisionModel::HighRes, "https://example.com/x.png".to_owned());
        assert!(request.max_tokens.is_none());
        assert!(request.temperature.is_none());
    }
}
