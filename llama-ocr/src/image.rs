//! Image payload handling.
//!
//! The API accepts images either by remote URL or inlined as a base64 data
//! URL. [`ImageSource`] classifies a user-supplied reference into one of the
//! two and resolves it to the URL string that goes on the wire.

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::Result;

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote image, referenced by URL.
    Remote(String),
    /// Local file, inlined as a base64 data URL.
    Local(PathBuf),
}

impl ImageSource {
    /// Classify a user-supplied reference as remote or local.
    ///
    /// Only `http://` and `https://` prefixes count as remote; everything
    /// else, including other URL schemes, is treated as a filesystem path.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::Remote(reference.to_owned())
        } else {
            Self::Local(PathBuf::from(reference))
        }
    }

    /// Check if this source is a remote URL.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Get the local path if this source is a local file.
    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Local(path) => Some(path),
            Self::Remote(_) => None,
        }
    }

    /// Resolve to the URL string sent to the API.
    ///
    /// Remote URLs pass through unchanged. Local files are read from disk
    /// and wrapped as a base64 data URL; the declared media type is always
    /// `image/jpeg` regardless of the file's actual encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if a local file cannot be read.
    pub async fn to_api_url(&self) -> Result<String> {
        match self {
            Self::Remote(url) => Ok(url.clone()),
            Self::Local(path) => {
                let bytes = tokio::fs::read(path).await?;
                Ok(data_url(&bytes))
            }
        }
    }
}

/// Wrap raw image bytes as a `data:image/jpeg;base64,...` URL.
fn data_url(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", BASE64.encode(bytes))
}
