//! Axum request handlers for the HTTP API.
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::routes::AppState;
use crate::api::validation::{GenerationRequest, RemixForm, SourceImage};
use crate::characters;
use crate::error::{AppError, AppResult};
use crate::replicate::RemixInput;
use crate::studio::Mode;
use crate::utils::text::{excerpt, secret_prefix, truncate_chars, DIAGNOSTIC_DUMP_CHARS, ERROR_EXCERPT_CHARS};

/// Fixed sampler settings for remix jobs.
pub const REMIX_STEPS: u32 = 30;
pub const REMIX_GUIDANCE: f64 = 7.5;

const FALLBACK_IMAGE_TYPE: &str = "image/png";

pub async fn root() -> &'static str {
    "Studio Gateway"
}

/// Binary media response that callers must not cache.
fn media_response(bytes: Bytes, content_type: &str) -> Response {
    let content_type = HeaderValue::from_str(content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(FALLBACK_IMAGE_TYPE));
    (
        [(CONTENT_TYPE, content_type), (CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        bytes,
    )
        .into_response()
}

/// POST /api/generate -- text-to-image.
pub async fn generate(State(state): State<Arc<AppState>>, body: Bytes) -> AppResult<Response> {
    let request = GenerationRequest::from_json(&body)?;
    tracing::info!(
        width = request.width,
        height = request.height,
        steps = request.steps,
        seeded = request.seed.is_some(),
        "Generating image"
    );

    let output = state.image_provider.generate_image(&request.to_payload()).await?;
    let content_type = output
        .content_type
        .as_deref()
        .filter(|ct| !ct.is_empty())
        .unwrap_or(FALLBACK_IMAGE_TYPE);
    Ok(media_response(output.bytes, content_type))
}

/// POST /api/generate-video -- video generation is not wired to a provider.
pub async fn generate_video() -> AppResult<Response> {
    Err(AppError::NotImplemented("Video generation is not available yet".to_string()))
}

/// POST /api/remix -- image-to-image.
///
/// Runs the remote job, then downloads the asset it points at. The download
/// only happens when the job output yields a usable locator.
pub async fn remix(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    if state.config.replicate_token.is_none() {
        return Err(AppError::Config(
            "REPLICATE_API_TOKEN missing. Add it to .env and restart.".to_string(),
        ));
    }
    let multipart = multipart.map_err(|e| AppError::BadRequest(e.to_string()))?;
    let request = read_remix_form(multipart, state.config.remix_max_bytes)
        .await?
        .validate()?;

    let input = RemixInput {
        prompt: request.prompt,
        image: request.source_image.to_data_url(),
        strength: request.strength,
        num_inference_steps: REMIX_STEPS,
        guidance_scale: REMIX_GUIDANCE,
    };
    tracing::info!(
        model = %state.config.remix_model,
        strength = input.strength,
        image_bytes = request.source_image.bytes.len(),
        "Running remix"
    );

    let output = state.remix_provider.run(&state.config.remix_model, &input).await?;
    let locator = output.locator().ok_or_else(|| {
        let dump = output.to_json().to_string();
        AppError::MalformedUpstream(format!(
            "Malformed remix provider response: {}",
            truncate_chars(&dump, DIAGNOSTIC_DUMP_CHARS)
        ))
    })?;

    let asset = state.remix_provider.fetch_asset(locator).await?;
    if !asset.is_success() {
        return Err(AppError::AssetFetch {
            status: asset.status,
            excerpt: excerpt(&asset.bytes, ERROR_EXCERPT_CHARS),
        });
    }

    let content_type = asset
        .content_type
        .as_deref()
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or(FALLBACK_IMAGE_TYPE);
    Ok(media_response(asset.bytes, content_type))
}

/// Collect the remix fields. Only an `image` part that carries a file name
/// counts as an uploaded file; unknown fields are skipped.
async fn read_remix_form(mut multipart: Multipart, max_bytes: usize) -> AppResult<RemixForm> {
    let reject = |e: MultipartError| form_error(e, max_bytes);
    let mut form = RemixForm::default();
    while let Some(field) = multipart.next_field().await.map_err(reject)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                if field.file_name().is_none() {
                    continue;
                }
                let media_type = field
                    .content_type()
                    .filter(|ct| !ct.is_empty())
                    .unwrap_or(FALLBACK_IMAGE_TYPE)
                    .to_string();
                let bytes = field.bytes().await.map_err(reject)?;
                form.image = Some(SourceImage { bytes, media_type });
            }
            "prompt" => form.prompt = Some(field.text().await.map_err(reject)?),
            "strength" => form.strength = Some(field.text().await.map_err(reject)?),
            _ => {}
        }
    }
    Ok(form)
}

/// The body limit surfaces mid-stream as a multipart read error.
fn form_error(err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { max_bytes }
    } else {
        AppError::BadRequest(err.body_text())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HfHealth {
    pub token_present: bool,
    pub token_prefix: Option<String>,
    pub image_model: Option<String>,
    pub image_alt: Option<String>,
    pub video_model: Option<String>,
    pub video_alt: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixHealth {
    pub token_present: bool,
    pub model: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub ts: String,
    pub hf: HfHealth,
    pub replicate: RemixHealth,
}

/// GET /api/health -- credential presence and configured models. No
/// outbound calls.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let cfg = &state.config;
    Json(HealthResponse {
        ok: true,
        service: env!("CARGO_PKG_NAME"),
        ts: chrono::Utc::now().to_rfc3339(),
        hf: HfHealth {
            token_present: cfg.hf_token.is_some(),
            token_prefix: cfg.hf_token.as_deref().map(|t| secret_prefix(t).to_string()),
            image_model: cfg.hf_model_image.clone(),
            image_alt: cfg.hf_model_image_alt.clone(),
            video_model: cfg.hf_model_video.clone(),
            video_alt: cfg.hf_model_video_alt.clone(),
        },
        replicate: RemixHealth {
            token_present: cfg.replicate_token.is_some(),
            model: cfg.remix_model.to_string(),
        },
    })
}

/// GET /api/characters
pub async fn list_characters() -> Json<Value> {
    let items: Vec<Value> = characters::all()
        .iter()
        .map(|p| json!({ "id": p.id, "name": p.name, "tagline": p.tagline }))
        .collect();
    Json(Value::Array(items))
}

/// GET /api/characters/:id -- profile plus its prefilled studio links.
pub async fn get_character(Path(id): Path<String>) -> AppResult<Json<Value>> {
    let profile = characters::profile(&id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown character '{id}'")))?;
    Ok(Json(json!({
        "profile": profile,
        "links": {
            "image": profile.studio_url(Mode::Image, None),
            "remix": profile.studio_url(Mode::Remix, None),
        },
    })))
}
