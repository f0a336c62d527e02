//! Vision model selection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Vision models available for OCR.
///
/// Each variant maps to a fixed model identifier on the API; there is no
/// discovery step and unknown names are rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum VisionModel {
    /// 90B-parameter model (default).
    #[default]
    HighRes,
    /// 11B-parameter model.
    LowRes,
    /// Free hosted model.
    Free,
}

impl VisionModel {
    /// User-facing name, as accepted on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HighRes => "Llama-3.2-90B-Vision",
            Self::LowRes => "Llama-3.2-11B-Vision",
            Self::Free => "free",
        }
    }

    /// Full model identifier sent to the API.
    #[must_use]
    pub const fn model_id(&self) -> &'static str {
        match self {
            Self::HighRes => "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo",
            Self::LowRes => "meta-llama/Llama-3.2-11B-Vision-Instruct-Turbo",
            Self::Free => "meta-llama/Llama-Vision-Free",
        }
    }
}

impl fmt::Display for VisionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisionModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Llama-3.2-90B-Vision" => Ok(Self::HighRes),
            "Llama-3.2-11B-Vision" => Ok(Self::LowRes),
            "free" => Ok(Self::Free),
            other => Err(Error::InvalidModel(other.to_owned())),
        }
    }
}
