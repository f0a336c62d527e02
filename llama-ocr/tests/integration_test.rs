//! Integration tests for llama-ocr.

#![allow(clippy::unwrap_used, clippy::panic)]

use assert_fs::prelude::*;
use llama_ocr::config::{Config, fetch_config_from, write_config_to};
use llama_ocr::{Error, ImageSource, OcrRequest, VisionModel};

#[tokio::test]
async fn fetch_initializes_missing_config_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child(".llamaocr.json");

    let config = fetch_config_from(file.path().to_path_buf()).await.unwrap();

    assert_eq!(config, Config::default());
    // The fetch leaves an empty JSON object behind.
    file.assert("{}");
}

#[tokio::test]
async fn config_write_then_fetch_round_trip() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child(".llamaocr.json");

    let config = Config {
        api_key: Some("sk-roundtrip".to_owned()),
        extra: serde_json::Map::new(),
    };
    write_config_to(&config, file.path().to_path_buf())
        .await
        .unwrap();

    let loaded = fetch_config_from(file.path().to_path_buf()).await.unwrap();
    assert_eq!(loaded.api_key.as_deref(), Some("sk-roundtrip"));
    assert!(loaded.extra.is_empty());
}

#[tokio::test]
async fn config_rewrite_preserves_unknown_fields() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child(".llamaocr.json");
    file.write_str(r#"{"apiKey": "old", "endpoint": "https://example.com", "retries": 3}"#)
        .unwrap();

    let mut config = fetch_config_from(file.path().to_path_buf()).await.unwrap();
    config.api_key = Some("new".to_owned());
    write_config_to(&config, file.path().to_path_buf())
        .await
        .unwrap();

    let raw = tokio::fs::read_to_string(file.path()).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["apiKey"], "new");
    assert_eq!(value["endpoint"], "https://example.com");
    assert_eq!(value["retries"], 3);
    // Pretty-printed with two-space indentation.
    assert!(raw.contains("\n  \"apiKey\""));
}

#[tokio::test]
async fn config_overwrite_drops_removed_key() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child(".llamaocr.json");
    file.write_str(r#"{"apiKey": "old"}"#).unwrap();

    let mut config = fetch_config_from(file.path().to_path_buf()).await.unwrap();
    config.api_key = None;
    write_config_to(&config, file.path().to_path_buf())
        .await
        .unwrap();

    // A full overwrite: the cleared key is gone, not merged back.
    file.assert("{}");
}

#[tokio::test]
async fn config_invalid_json_fails_to_parse() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child(".llamaocr.json");
    file.write_str("{ this is not json").unwrap();

    let err = fetch_config_from(file.path().to_path_buf())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("JSON"));
}

#[tokio::test]
async fn local_image_resolves_to_jpeg_data_url() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("scan.png");
    file.write_binary(&[1, 2, 3, 4, 5]).unwrap();

    let source = ImageSource::parse(file.path().to_str().unwrap());
    assert!(!source.is_remote());

    let url = source.to_api_url().await.unwrap();
    assert_eq!(url, "data:image/jpeg;base64,AQIDBAU=");
}

#[tokio::test]
async fn unreadable_image_surfaces_io_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let missing = dir.child("not-there.jpg");

    let source = ImageSource::parse(missing.path().to_str().unwrap());
    let err = source.to_api_url().await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn remote_image_skips_the_filesystem() {
    let source = ImageSource::parse("https://example.com/missing-locally.png");
    let url = source.to_api_url().await.unwrap();
    assert_eq!(url, "https://example.com/missing-locally.png");
}

#[test]
fn model_selection_covers_all_tiers() {
    assert_eq!(
        VisionModel::HighRes.model_id(),
        "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo"
    );
    assert_eq!(
        VisionModel::LowRes.model_id(),
        "meta-llama/Llama-3.2-11B-Vision-Instruct-Turbo"
    );
    assert_eq!(VisionModel::Free.model_id(), "meta-llama/Llama-Vision-Free");
    // An omitted model means the 90B tier.
    assert_eq!(VisionModel::default(), VisionModel::HighRes);
}

#[test]
fn ocr_request_builder_surface() {
    let request = OcrRequest::new("https://example.com/page.jpg")
        .with_api_key("sk-int")
        .with_model(VisionModel::LowRes);

    assert_eq!(request.file_path, "https://example.com/page.jpg");
    assert_eq!(request.api_key.as_deref(), Some("sk-int"));
    assert_eq!(request.model, VisionModel::LowRes);
}
