//! How the Studio reaches the gateway.
use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

/// Source image picked for a remix.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

/// One outbound Studio call.
#[derive(Debug, Clone)]
pub enum StudioRequest {
    Json {
        path: &'static str,
        body: Value,
    },
    Multipart {
        path: &'static str,
        fields: Vec<(&'static str, String)>,
        image: SelectedImage,
    },
}

impl StudioRequest {
    pub fn path(&self) -> &'static str {
        match self {
            StudioRequest::Json { path, .. } | StudioRequest::Multipart { path, .. } => path,
        }
    }
}

/// Response as seen by the classifier: status, declared type, full body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait StudioTransport: Send + Sync {
    async fn send(&self, request: StudioRequest) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport against a running gateway.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpTransport { client: Client::new(), base_url }
    }

    /// GET /api/health
    pub async fn health(&self) -> Result<Value, TransportError> {
        let url = format!("{}/api/health", self.base_url);
        Ok(self.client.get(&url).send().await?.json().await?)
    }
}

#[async_trait]
impl StudioTransport for HttpTransport {
    async fn send(&self, request: StudioRequest) -> Result<TransportResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path());
        tracing::debug!("Studio request to {}", url);
        let builder = match request {
            StudioRequest::Json { body, .. } => self.client.post(&url).json(&body),
            StudioRequest::Multipart { fields, image, .. } => {
                let mut form = Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                let part = Part::bytes(image.bytes.to_vec())
                    .file_name(image.file_name)
                    .mime_str(&image.media_type)?;
                self.client.post(&url).multipart(form.part("image", part))
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;
        Ok(TransportResponse { status, content_type, body })
    }
}
