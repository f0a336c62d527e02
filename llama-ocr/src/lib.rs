//! llama-ocr - Convert images into Markdown with hosted vision models
//!
//! This crate turns a single image (local file or remote URL) into Markdown
//! text by sending it to a multimodal model hosted on Together AI.
//!
//! # Example
//!
//! ```rust,ignore
//! use llama_ocr::{OcrRequest, VisionModel, ocr};
//!
//! let markdown = ocr(
//!     OcrRequest::new("./receipt.jpg").with_model(VisionModel::Free),
//! )
//! .await?;
//! println!("{markdown}");
//! ```

pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod ocr;
pub mod together;

pub use error::{ApiError, Error, Result};
pub use image::ImageSource;
pub use model::VisionModel;
pub use ocr::{OcrRequest, ocr, ocr_with_client};
