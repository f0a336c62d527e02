//! Together AI chat completions client.
//!
//! Talks to the OpenAI-compatible `/chat/completions` endpoint hosted at
//! `api.together.xyz`, authenticated with a bearer API key.

mod chat;
mod client;
mod config;
mod types;

pub use client::Together;
pub use config::TogetherConfig;
pub use types::{ChatMessage, ChatRequest, ContentPart, ImageUrl};
