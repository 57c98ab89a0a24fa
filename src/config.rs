//! Env-driven configuration for the service and the `studioctl` client.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Credentials are optional at load time: a missing
//! credential only fails the request that needs it.
use std::env;
use std::time::Duration;

use crate::replicate::ModelRef;
use crate::utils::text::secret_prefix;

pub const DEFAULT_HF_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_IMAGE_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";
pub const DEFAULT_REPLICATE_BASE_URL: &str = "https://api.replicate.com/v1";
/// SDXL img2img reference used for remix unless `REMIX_MODEL` overrides it.
pub const DEFAULT_REMIX_MODEL: &str =
    "stability-ai/sdxl:7762fd03f0b2c8f4f8f24c6d85d6df4d8f3f8c3cb1e4e9f0a9cf0b7e6e5b8d2a";
pub const DEFAULT_STUDIO_URL: &str = "http://127.0.0.1:8189";
/// Request body cap on `/api/remix`. Phone photos routinely exceed axum's 2 MB default.
pub const DEFAULT_REMIX_MAX_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid REMIX_MODEL '{value}': {reason}")]
    InvalidModelRef { value: String, reason: String },
    #[error("Invalid REPLICATE_POLL_INTERVAL_MS '{0}'")]
    InvalidPollInterval(String),
    #[error("Invalid REMIX_MAX_BYTES '{0}'")]
    InvalidBodyLimit(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_host: String,
    pub api_port: String,
    pub hf_token: Option<String>,
    pub hf_base_url: String,
    pub hf_model_image: Option<String>,
    pub hf_model_image_alt: Option<String>,
    pub hf_model_video: Option<String>,
    pub hf_model_video_alt: Option<String>,
    pub replicate_token: Option<String>,
    pub replicate_base_url: String,
    pub remix_model: ModelRef,
    pub poll_interval: Duration,
    pub remix_max_bytes: usize,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let remix_raw = get("REMIX_MODEL").unwrap_or_else(|| DEFAULT_REMIX_MODEL.to_string());
        let remix_model = ModelRef::parse(&remix_raw).map_err(|reason| ConfigError::InvalidModelRef {
            value: remix_raw.clone(),
            reason,
        })?;

        let poll_interval = match get("REPLICATE_POLL_INTERVAL_MS") {
            Some(raw) => {
                let ms: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidPollInterval(raw.clone()))?;
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(1000),
        };

        let remix_max_bytes = match get("REMIX_MAX_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidBodyLimit(raw.clone()))?,
            None => DEFAULT_REMIX_MAX_BYTES,
        };

        Ok(Config {
            api_host: get("API_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            api_port: get("API_PORT").unwrap_or_else(|| "8189".to_string()),
            hf_token: get("HF_TOKEN"),
            hf_base_url: get("HF_BASE_URL").unwrap_or_else(|| DEFAULT_HF_BASE_URL.to_string()),
            hf_model_image: get("HF_MODEL_IMAGE"),
            hf_model_image_alt: get("HF_MODEL_IMAGE_ALT"),
            hf_model_video: get("HF_MODEL_VIDEO"),
            hf_model_video_alt: get("HF_MODEL_VIDEO_ALT"),
            replicate_token: get("REPLICATE_API_TOKEN"),
            replicate_base_url: get("REPLICATE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_REPLICATE_BASE_URL.to_string()),
            remix_model,
            poll_interval,
            remix_max_bytes,
        })
    }

    /// Image model actually sent to the text-to-image provider.
    pub fn image_model(&self) -> &str {
        self.hf_model_image.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    /// Base URL `studioctl` talks to.
    pub fn studio_url() -> String {
        env::var("STUDIO_URL").unwrap_or_else(|_| DEFAULT_STUDIO_URL.to_string())
    }

    pub fn log_summary(&self) {
        let masked = |v: &Option<String>| match v {
            Some(s) => format!("{}…", secret_prefix(s)),
            None => "<unset>".to_string(),
        };
        let plain = |v: &Option<String>| v.clone().unwrap_or_else(|| "<unset>".to_string());
        tracing::info!("API_HOST: {}", self.api_host);
        tracing::info!("API_PORT: {}", self.api_port);
        tracing::info!("HF_TOKEN: {}", masked(&self.hf_token));
        tracing::info!("HF_BASE_URL: {}", self.hf_base_url);
        tracing::info!("HF_MODEL_IMAGE: {}", plain(&self.hf_model_image));
        tracing::info!("HF_MODEL_VIDEO: {}", plain(&self.hf_model_video));
        tracing::info!("REPLICATE_API_TOKEN: {}", masked(&self.replicate_token));
        tracing::info!("REMIX_MODEL: {}", self.remix_model);
        tracing::info!("REMIX_MAX_BYTES: {}", self.remix_max_bytes);
    }
}
