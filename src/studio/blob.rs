//! Locally addressable binary resources (blob URL equivalents).
//!
//! A store hands out opaque `blob:` locators for in-memory bytes. Every
//! locator must be released exactly once by its owner.
use std::collections::HashMap;
use std::sync::Mutex;

use axum::body::Bytes;

pub trait BlobStore: Send + Sync {
    /// Keep `bytes` addressable and return the locator for them.
    fn create(&self, bytes: Bytes, media_type: &str) -> String;

    /// Release a locator. Returns `false` when it was not live.
    fn release(&self, locator: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub bytes: Bytes,
    pub media_type: String,
}

/// Process-local store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Blob>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locator: &str) -> Option<Blob> {
        self.blobs.lock().ok()?.get(locator).cloned()
    }

    /// Number of live locators.
    pub fn live(&self) -> usize {
        self.blobs.lock().map(|b| b.len()).unwrap_or(0)
    }
}

impl BlobStore for MemoryBlobStore {
    fn create(&self, bytes: Bytes, media_type: &str) -> String {
        let locator = format!("blob:{}", uuid::Uuid::new_v4());
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.insert(locator.clone(), Blob { bytes, media_type: media_type.to_string() });
        }
        locator
    }

    fn release(&self, locator: &str) -> bool {
        match self.blobs.lock() {
            Ok(mut blobs) => blobs.remove(locator).is_some(),
            Err(_) => false,
        }
    }
}
