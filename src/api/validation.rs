//! Inbound request schemas and their validation.
//!
//! Raw bodies are deserialized leniently (every field optional, numbers as
//! `f64`) so that every problem is reported as a human-readable message
//! instead of the first serde failure. Validation collects all messages and
//! never widens a bound: out-of-range values are rejected, not clamped.
use axum::body::Bytes;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::hf::{ImageOptions, ImagePayload, ImageParameters};

pub const PROMPT_MAX_CHARS: usize = 2000;
pub const DIMENSION_RANGE: (i64, i64) = (256, 1536);
pub const STEPS_RANGE: (i64, i64) = (1, 80);
pub const GUIDANCE_RANGE: (f64, f64) = (0.0, 30.0);
pub const SEED_RANGE: (i64, i64) = (0, 2_147_483_647);

pub const DEFAULT_WIDTH: u32 = 768;
pub const DEFAULT_HEIGHT: u32 = 960;
pub const DEFAULT_STEPS: u32 = 16;
pub const DEFAULT_GUIDANCE: f64 = 7.5;
pub const DEFAULT_STRENGTH: f64 = 0.65;

/// Body of `POST /api/generate` as sent by clients.
///
/// `steps` and `guidanceScale` are accepted as short spellings. When a body
/// carries both spellings of a field, the snake_case one is used.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub num_inference_steps: Option<f64>,
    #[serde(default)]
    pub steps: Option<f64>,
    #[serde(default)]
    pub guidance_scale: Option<f64>,
    #[serde(default, rename = "guidanceScale")]
    pub guidance_scale_short: Option<f64>,
    #[serde(default)]
    pub seed: Option<f64>,
}

/// A validated text-to-image request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub guidance_scale: f64,
    pub seed: Option<u32>,
}

impl GenerationRequest {
    /// Parse and validate a raw JSON body.
    pub fn from_json(body: &[u8]) -> AppResult<Self> {
        let parsed: Option<GenerateBody> = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(vec![format!("Invalid request body: {e}")]))?;
        let body = parsed
            .ok_or_else(|| AppError::Validation(vec!["Request body must be a JSON object".to_string()]))?;
        body.validate()
    }

    pub fn to_payload(&self) -> ImagePayload {
        ImagePayload {
            inputs: self.prompt.clone(),
            parameters: ImageParameters {
                width: self.width,
                height: self.height,
                num_inference_steps: self.steps,
                guidance_scale: self.guidance_scale,
                seed: self.seed,
            },
            options: ImageOptions::default(),
        }
    }
}

impl GenerateBody {
    pub fn validate(self) -> AppResult<GenerationRequest> {
        let mut issues = Vec::new();
        let prompt = check_prompt(&mut issues, self.prompt);
        let width = check_int(&mut issues, "Width", self.width, DIMENSION_RANGE);
        let height = check_int(&mut issues, "Height", self.height, DIMENSION_RANGE);
        let steps = check_int(&mut issues, "Steps", self.num_inference_steps.or(self.steps), STEPS_RANGE);
        let guidance = check_real(
            &mut issues,
            "Guidance scale",
            self.guidance_scale.or(self.guidance_scale_short),
            GUIDANCE_RANGE,
        );
        let seed = check_int(&mut issues, "Seed", self.seed, SEED_RANGE);

        if !issues.is_empty() {
            return Err(AppError::Validation(issues));
        }
        Ok(GenerationRequest {
            prompt,
            width: width.map_or(DEFAULT_WIDTH, |v| v as u32),
            height: height.map_or(DEFAULT_HEIGHT, |v| v as u32),
            steps: steps.map_or(DEFAULT_STEPS, |v| v as u32),
            guidance_scale: guidance.unwrap_or(DEFAULT_GUIDANCE),
            seed: seed.map(|v| v as u32),
        })
    }
}

/// Uploaded source image with its declared media type.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub bytes: Bytes,
    pub media_type: String,
}

impl SourceImage {
    /// Self-describing inline form: `data:<mime>;base64,<payload>`.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, STANDARD.encode(&self.bytes))
    }
}

/// Fields of `POST /api/remix` as collected from the multipart body.
#[derive(Debug, Default)]
pub struct RemixForm {
    pub prompt: Option<String>,
    pub strength: Option<String>,
    pub image: Option<SourceImage>,
}

/// A validated image-to-image request.
#[derive(Debug, Clone, PartialEq)]
pub struct RemixRequest {
    pub prompt: String,
    pub strength: f64,
    pub source_image: SourceImage,
}

impl RemixForm {
    pub fn validate(self) -> AppResult<RemixRequest> {
        let source_image = self.image.ok_or(AppError::MissingImage)?;

        let mut issues = Vec::new();
        let prompt = check_prompt(&mut issues, self.prompt);
        let strength = match self.strength.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => Some(DEFAULT_STRENGTH),
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => check_real(&mut issues, "Strength", Some(v), (0.0, 1.0)),
                _ => {
                    issues.push("Strength must be a number".to_string());
                    None
                }
            },
        };

        if !issues.is_empty() {
            return Err(AppError::Validation(issues));
        }
        Ok(RemixRequest {
            prompt,
            strength: strength.unwrap_or(DEFAULT_STRENGTH),
            source_image,
        })
    }
}

fn check_prompt(issues: &mut Vec<String>, prompt: Option<String>) -> String {
    let prompt = prompt.unwrap_or_default();
    if prompt.trim().is_empty() {
        issues.push("Prompt is required".to_string());
    } else if prompt.chars().count() > PROMPT_MAX_CHARS {
        issues.push("Prompt too long".to_string());
    }
    prompt
}

fn check_int(issues: &mut Vec<String>, label: &str, value: Option<f64>, (min, max): (i64, i64)) -> Option<i64> {
    let v = value?;
    if v.fract() != 0.0 {
        issues.push(format!("{label} must be an integer"));
        return None;
    }
    if v < min as f64 || v > max as f64 {
        issues.push(format!("{label} must be between {min} and {max}"));
        return None;
    }
    Some(v as i64)
}

fn check_real(issues: &mut Vec<String>, label: &str, value: Option<f64>, (min, max): (f64, f64)) -> Option<f64> {
    let v = value?;
    if v < min || v > max {
        issues.push(format!("{label} must be between {min} and {max}"));
        return None;
    }
    Some(v)
}
