//! Request/response schema pair for the text-to-image provider.
use axum::body::Bytes;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePayload {
    pub inputs: String,
    pub parameters: ImageParameters,
    pub options: ImageOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageParameters {
    pub width: u32,
    pub height: u32,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOptions {
    pub wait_for_model: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        ImageOptions { wait_for_model: true }
    }
}

/// Image bytes plus the content type the provider reported, if any.
#[derive(Debug, Clone)]
pub struct ImageOutput {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}
