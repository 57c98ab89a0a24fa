//! The Studio controller.
//!
//! Holds the form state, dispatches exactly one gateway call per generation,
//! and records exactly one result per settlement at the head of the history.
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};

use crate::studio::blob::BlobStore;
use crate::studio::classify::{classify, Classified};
use crate::studio::history::{GenerationResult, History, Outcome};
use crate::studio::transport::{SelectedImage, StudioRequest, StudioTransport};
use crate::studio::Mode;

/// Editable form state.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioSettings {
    pub mode: Mode,
    pub prompt: String,
    pub character: Option<String>,
    pub aspect: String,
    pub seed: Option<i64>,
    pub steps: u32,
    pub guidance: f64,
    pub strength: f64,
}

impl Default for StudioSettings {
    fn default() -> Self {
        StudioSettings {
            mode: Mode::Image,
            prompt: String::new(),
            character: Some("nova".to_string()),
            aspect: "4:5".to_string(),
            seed: Some(20251201),
            steps: 16,
            guidance: 7.5,
            strength: 0.65,
        }
    }
}

/// Output size for an aspect label. Unknown labels use portrait 4:5.
pub fn aspect_to_size(aspect: &str) -> (u32, u32) {
    match aspect {
        "16:9" => (1024, 576),
        "1:1" => (768, 768),
        _ => (768, 960),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioPhase {
    Idle,
    Generating,
    Settled(Settlement),
}

pub struct Studio<T: StudioTransport> {
    pub settings: StudioSettings,
    base_image: Option<SelectedImage>,
    transport: T,
    blobs: Arc<dyn BlobStore>,
    history: History,
    active: Option<String>,
    generating: bool,
    last_settlement: Option<Settlement>,
}

impl<T: StudioTransport> Studio<T> {
    pub fn new(transport: T, blobs: Arc<dyn BlobStore>) -> Self {
        Studio {
            settings: StudioSettings::default(),
            base_image: None,
            transport,
            history: History::new(Arc::clone(&blobs)),
            blobs,
            active: None,
            generating: false,
            last_settlement: None,
        }
    }

    pub fn set_base_image(&mut self, image: Option<SelectedImage>) {
        self.base_image = image;
    }

    pub fn base_image(&self) -> Option<&SelectedImage> {
        self.base_image.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn phase(&self) -> StudioPhase {
        if self.generating {
            return StudioPhase::Generating;
        }
        self.last_settlement.map_or(StudioPhase::Idle, StudioPhase::Settled)
    }

    /// Non-blank prompt, nothing in flight, and a source image in remix mode.
    pub fn can_generate(&self) -> bool {
        !self.settings.prompt.trim().is_empty()
            && !self.generating
            && (self.settings.mode != Mode::Remix || self.base_image.is_some())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Currently displayed result.
    pub fn active(&self) -> Option<&GenerationResult> {
        self.active.as_deref().and_then(|id| self.history.get(id))
    }

    /// Display an entry from history. Returns whether it exists.
    pub fn select(&mut self, id: &str) -> bool {
        if self.history.get(id).is_some() {
            self.active = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Remove an entry and release its media.
    pub fn evict(&mut self, id: &str) -> bool {
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        self.history.evict(id)
    }

    pub fn clear_history(&mut self) {
        self.active = None;
        self.last_settlement = None;
        self.history.clear();
    }

    /// Run one generation for the current settings.
    ///
    /// A no-op returning `None` when [`Self::can_generate`] is false.
    /// Otherwise every settlement, including transport failures, yields one
    /// new history head which becomes the active result.
    pub async fn generate(&mut self) -> Option<&GenerationResult> {
        if !self.can_generate() {
            return None;
        }
        let request = self.build_request()?;
        let settings = self.settings.clone();

        tracing::info!(mode = %settings.mode, endpoint = request.path(), "Studio generation started");
        let in_flight = InFlight::start(&mut self.generating);
        let sent = self.transport.send(request).await;
        drop(in_flight);

        let outcome = match sent {
            Ok(response) => match classify(settings.mode, &response) {
                Classified::Media { bytes, media_type } => {
                    let url = self.blobs.create(bytes, &media_type);
                    Outcome::Media { url, media_type }
                }
                Classified::Failure(error) => Outcome::Failed { error },
            },
            Err(e) => {
                let message = e.to_string();
                Outcome::Failed {
                    error: if message.is_empty() { "Network error".to_string() } else { message },
                }
            }
        };

        let prefix = if matches!(outcome, Outcome::Media { .. }) { "gen" } else { "err" };
        self.last_settlement = Some(match outcome {
            Outcome::Media { .. } => Settlement::Success,
            Outcome::Failed { .. } => Settlement::Failure,
        });
        let result = GenerationResult {
            id: format!("{prefix}_{}", uuid::Uuid::new_v4()),
            mode: settings.mode,
            prompt: settings.prompt,
            character: settings.character,
            aspect: settings.aspect,
            seed: settings.seed,
            created_at: Utc::now(),
            outcome,
        };
        if let Some(error) = result.error() {
            tracing::warn!(id = %result.id, error = %error, "Studio generation failed");
        }
        self.active = Some(result.id.clone());
        self.history.push_front(result);
        self.history.latest()
    }

    fn build_request(&self) -> Option<StudioRequest> {
        let s = &self.settings;
        let (width, height) = aspect_to_size(&s.aspect);
        match s.mode {
            Mode::Image => {
                let mut body = json!({
                    "prompt": s.prompt,
                    "width": width,
                    "height": height,
                    "num_inference_steps": s.steps,
                    "guidance_scale": s.guidance,
                });
                insert_seed(&mut body, s.seed);
                Some(StudioRequest::Json { path: Mode::Image.endpoint(), body })
            }
            Mode::Video => {
                let mut body = json!({
                    "prompt": s.prompt,
                    "num_inference_steps": s.steps,
                    "guidance_scale": s.guidance,
                });
                insert_seed(&mut body, s.seed);
                Some(StudioRequest::Json { path: Mode::Video.endpoint(), body })
            }
            Mode::Remix => {
                let image = self.base_image.clone()?;
                let mut fields = vec![
                    ("prompt", s.prompt.clone()),
                    ("strength", s.strength.to_string()),
                    ("width", width.to_string()),
                    ("height", height.to_string()),
                    ("num_inference_steps", s.steps.to_string()),
                    ("guidance_scale", s.guidance.to_string()),
                ];
                if let Some(seed) = s.seed {
                    fields.push(("seed", seed.to_string()));
                }
                Some(StudioRequest::Multipart { path: Mode::Remix.endpoint(), fields, image })
            }
        }
    }
}

/// Holds the in-flight flag for the duration of one send. Dropping the
/// generation future mid-call (e.g. under a timeout) still clears it.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        InFlight(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn insert_seed(body: &mut Value, seed: Option<i64>) {
    if let (Some(seed), Some(map)) = (seed, body.as_object_mut()) {
        map.insert("seed".to_string(), Value::from(seed));
    }
}
