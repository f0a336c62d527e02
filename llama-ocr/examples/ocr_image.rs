//! OCR a local image into Markdown.
//!
//! ```bash
//! export TOGETHER_API_KEY=...
//! cargo run --example ocr_image -- ./receipt.jpg
//! ```

#![allow(clippy::print_stdout)]

use llama_ocr::{OcrRequest, Result, VisionModel, ocr};

#[tokio::main]
async fn main() -> Result<()> {
    let file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./receipt.jpg".to_owned());

    let markdown = ocr(OcrRequest::new(file).with_model(VisionModel::Free)).await?;
    println!("{markdown}");

    Ok(())
}
