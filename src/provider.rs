//! Seams between the HTTP handlers and the external generation providers.
//!
//! Handlers only ever talk to these traits; `main` wires in the real HTTP
//! clients and tests wire in stubs.
use async_trait::async_trait;
use axum::body::Bytes;

use crate::hf::{ImageOutput, ImagePayload};
use crate::replicate::{ModelRef, RemixInput, RemixOutput};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0} missing. Add it to .env and restart.")]
    MissingCredential(&'static str),
    #[error("Provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success status from the provider. `body` is already truncated.
    #[error("Provider returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Malformed provider response: {0}")]
    Malformed(String),
    #[error("Remix prediction {status}: {detail}")]
    PredictionFailed { status: String, detail: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Raw response of a follow-up asset download.
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub status: u16,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl FetchedAsset {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Text-to-image provider.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate_image(&self, payload: &ImagePayload) -> ProviderResult<ImageOutput>;
}

/// Image-to-image provider: runs a remote job, then serves the produced asset.
#[async_trait]
pub trait RemixProvider: Send + Sync {
    /// Run the job to completion and return its output document.
    async fn run(&self, model: &ModelRef, input: &RemixInput) -> ProviderResult<RemixOutput>;

    /// Download the asset a job output points at. Non-success statuses are
    /// returned, not raised, so the caller decides how to surface them.
    async fn fetch_asset(&self, locator: &str) -> ProviderResult<FetchedAsset>;
}
