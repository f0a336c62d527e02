//! llama-ocr CLI - Image to Markdown
//!
//! A command-line interface that converts a single image (local file or
//! remote URL) into Markdown and prints it to stdout.

#![allow(clippy::print_stdout, clippy::print_stderr)] // stdout carries the Markdown, stderr the rest

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use llama_ocr::config;
use llama_ocr::{Error, OcrRequest, VisionModel, ocr};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Convert an image into Markdown using a hosted vision model
#[derive(Parser, Debug)]
#[command(name = "llama-ocr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path or URL of the image to convert
    #[arg(short, long, value_name = "FILE")]
    file: String,

    /// Together API key
    #[arg(short, long, env = "TOGETHER_API_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Model to use: Llama-3.2-90B-Vision, Llama-3.2-11B-Vision, or free
    #[arg(short, long, value_name = "MODEL")]
    model: Option<VisionModel>,

    /// Save the resolved API key to ~/.llamaocr.json
    #[arg(long)]
    save_key: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose);

    // Run the async main
    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::MissingApiKey) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error processing OCR: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
///
/// Logs go to stderr so that stdout stays clean for the Markdown output.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("llama_ocr={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> llama_ocr::Result<()> {
    let api_key = resolve_api_key(cli.key, config::config_path())
        .await?
        .ok_or(Error::MissingApiKey)?;

    if cli.save_key {
        let mut stored = config::fetch_config().await?;
        stored.api_key = Some(api_key.clone());
        config::write_config(&stored).await?;
        eprintln!("API key saved to {}", config::config_path().display());
    }

    let request = OcrRequest::new(cli.file)
        .with_api_key(api_key)
        .with_model(cli.model.unwrap_or_default());

    let markdown = ocr(request).await?;
    println!("{markdown}");

    Ok(())
}

/// Resolve the API key: the explicit flag or environment value first, then
/// the persisted config. The config file is only touched when the explicit
/// value is absent.
async fn resolve_api_key(
    explicit: Option<String>,
    config_path: PathBuf,
) -> llama_ocr::Result<Option<String>> {
    if let Some(key) = explicit.filter(|key| !key.is_empty()) {
        return Ok(Some(key));
    }

    let stored = config::fetch_config_from(config_path).await?;
    Ok(stored.api_key.filter(|key| !key.is_empty()))
}
