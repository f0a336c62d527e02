//! OCR several images through one shared client.
//!
//! Demonstrates `ocr_with_client` for reusing a connection pool across
//! multiple extractions.
//!
//! ```bash
//! export TOGETHER_API_KEY=...
//! cargo run --example ocr_batch -- page1.png page2.png
//! ```

#![allow(clippy::print_stdout)]

use llama_ocr::together::Together;
use llama_ocr::{Result, VisionModel, ocr_with_client};

#[tokio::main]
async fn main() -> Result<()> {
    let client = Together::from_env()?;

    for file in std::env::args().skip(1) {
        let markdown = ocr_with_client(&client, &file, VisionModel::Free).await?;
        println!("## {file}\n\n{markdown}\n");
    }

    Ok(())
}
