//! Studio client: form state, generation lifecycle, result history.
//!
//! - `state`: the [`Studio`] controller and its settings.
//! - `classify`: response classification shared by every mode.
//! - `history`: results and the list that owns their media.
//! - `blob`: locally addressable binary resources.
//! - `transport`: the seam to the gateway (reqwest in production).
//! - `prefill`: studio links in, studio links out.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod blob;
pub mod classify;
pub mod history;
pub mod prefill;
pub mod state;
pub mod transport;

pub use blob::{BlobStore, MemoryBlobStore};
pub use history::{GenerationResult, History, Outcome};
pub use prefill::Prefill;
pub use state::{Studio, StudioPhase, StudioSettings};
pub use transport::{HttpTransport, SelectedImage, StudioTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Image,
    Video,
    Remix,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Image => "image",
            Mode::Video => "video",
            Mode::Remix => "remix",
        }
    }

    /// Case-insensitive parse; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "image" => Some(Mode::Image),
            "video" => Some(Mode::Video),
            "remix" => Some(Mode::Remix),
            _ => None,
        }
    }

    /// Gateway endpoint this mode posts to.
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::Image => "/api/generate",
            Mode::Video => "/api/generate-video",
            Mode::Remix => "/api/remix",
        }
    }

    /// Verb used in generic failure messages.
    pub fn verb(self) -> &'static str {
        match self {
            Mode::Image | Mode::Video => "Generate",
            Mode::Remix => "Remix",
        }
    }

    /// Media type assumed for untyped binary responses.
    pub fn fallback_media_type(self) -> &'static str {
        match self {
            Mode::Image | Mode::Remix => "image/png",
            Mode::Video => "video/mp4",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse(s).ok_or_else(|| format!("unknown mode '{s}' (expected image, video or remix)"))
    }
}
