//! Common error type for the HTTP surface.
//!
//! Every variant renders as `{ "ok": false, "error": <message> }` with the
//! status picked in [`AppError::status`].
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input failed schema validation; messages are joined with `", "`.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Missing image file")]
    MissingImage,
    #[error("{0}")]
    BadRequest(String),
    #[error("Upload too large (limit is {} bytes)", .max_bytes)]
    PayloadTooLarge { max_bytes: usize },
    /// Required configuration is absent. Not retryable.
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Provider(#[from] ProviderError),
    /// The provider answered successfully with something we cannot use.
    #[error("{0}")]
    MalformedUpstream(String),
    #[error("Failed to fetch remix image ({status}): {excerpt}")]
    AssetFetch { status: u16, excerpt: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    NotImplemented(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingImage | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Config(_)
            | AppError::Provider(_)
            | AppError::MalformedUpstream(_)
            | AppError::AssetFetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        } else {
            tracing::debug!(error = %message, status = status.as_u16(), "Request rejected");
        }
        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}
