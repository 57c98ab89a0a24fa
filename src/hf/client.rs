//! Thin HTTP client for the text-to-image inference provider.
//!
//! - `generate_image` posts an [`ImagePayload`] to `<base>/<model>` and
//!   returns the raw image bytes with the reported content type.
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::hf::{ImageOutput, ImagePayload};
use crate::provider::{ImageProvider, ProviderError, ProviderResult};
use crate::utils::text::{excerpt, ERROR_EXCERPT_CHARS};

#[derive(Clone)]
pub struct HfClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    model: String,
}

impl HfClient {
    pub fn new(base_url: String, token: Option<String>, model: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        HfClient { client: Client::new(), base_url: base, token, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate one image.
    ///
    /// A 2xx response with a JSON body is the provider describing a problem
    /// (e.g. the model is still loading) rather than an image, and is
    /// reported as malformed.
    pub async fn generate(&self, payload: &ImagePayload) -> ProviderResult<ImageOutput> {
        let token = self
            .token
            .as_deref()
            .ok_or(ProviderError::MissingCredential("HF_TOKEN"))?;
        let url = format!("{}/{}", self.base_url, self.model);
        tracing::info!("Sending image request to provider at URL: {}", url);
        tracing::debug!(
            width = payload.parameters.width,
            height = payload.parameters.height,
            steps = payload.parameters.num_inference_steps,
            "Image payload"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .filter(|v| !v.is_empty());

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let error = ProviderError::Upstream {
                status: status.as_u16(),
                body: excerpt(&body, ERROR_EXCERPT_CHARS),
            };
            tracing::error!("{}", error);
            return Err(error);
        }

        let bytes = response.bytes().await?;
        if content_type.as_deref().is_some_and(|ct| ct.contains("application/json")) {
            return Err(ProviderError::Malformed(excerpt(&bytes, ERROR_EXCERPT_CHARS)));
        }

        tracing::info!("Received {} image bytes from provider", bytes.len());
        Ok(ImageOutput { bytes, content_type })
    }
}

#[async_trait]
impl ImageProvider for HfClient {
    async fn generate_image(&self, payload: &ImagePayload) -> ProviderResult<ImageOutput> {
        self.generate(payload).await
    }
}
