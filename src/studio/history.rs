//! Generation results and the history list that owns their media.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::studio::blob::BlobStore;
use crate::studio::Mode;

/// How many recent entries the Studio offers for selection.
pub const RECENT_WINDOW: usize = 8;

/// A result either points at local media or carries an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Media {
        #[serde(rename = "mediaUrl")]
        url: String,
        #[serde(rename = "mediaType")]
        media_type: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub id: String,
    pub mode: Mode,
    pub prompt: String,
    pub character: Option<String>,
    pub aspect: String,
    pub seed: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl GenerationResult {
    pub fn media_url(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Media { url, .. } => Some(url),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { error } => Some(error),
            Outcome::Media { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Media { .. })
    }
}

/// Most-recent-first list of results. It is the single owner of every media
/// locator it holds: removing an entry, clearing, or dropping the history
/// releases the locators back to the store.
pub struct History {
    entries: Vec<GenerationResult>,
    blobs: Arc<dyn BlobStore>,
}

impl History {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        History { entries: Vec::new(), blobs }
    }

    pub fn push_front(&mut self, result: GenerationResult) {
        self.entries.insert(0, result);
    }

    pub fn entries(&self) -> &[GenerationResult] {
        &self.entries
    }

    pub fn recent(&self) -> &[GenerationResult] {
        &self.entries[..self.entries.len().min(RECENT_WINDOW)]
    }

    pub fn latest(&self) -> Option<&GenerationResult> {
        self.entries.first()
    }

    pub fn get(&self, id: &str) -> Option<&GenerationResult> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove one entry and release its media. Returns whether it existed.
    pub fn evict(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|r| r.id == id) {
            Some(idx) => {
                let removed = self.entries.remove(idx);
                self.release(&removed);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for result in std::mem::take(&mut self.entries) {
            self.release(&result);
        }
    }

    fn release(&self, result: &GenerationResult) {
        if let Some(url) = result.media_url() {
            if !self.blobs.release(url) {
                tracing::warn!(id = %result.id, "Media locator was already released");
            }
        }
    }
}

impl Drop for History {
    fn drop(&mut self) {
        self.clear();
    }
}
