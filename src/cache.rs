// src/cache.rs
//! Content-hash cache for per-file extraction.
//!
//! Extraction is a pure function of file path and text, so a SHA-256
//! digest over both is a sound cache key (the path participates because
//! extracted records embed it). Shared across the rayon workers behind an
//! `RwLock`; reads dominate on warm runs.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::types::{APICall, Endpoint, SourceFile};

/// Cached output of one file's extraction pass.
#[derive(Debug, Clone, Default)]
pub struct FileExtraction {
    pub calls: Vec<APICall>,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Default)]
pub struct ExtractionCache {
    entries: RwLock<HashMap<[u8; 32], FileExtraction>>,
}

impl ExtractionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn digest(file: &SourceFile) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(file.path.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        hasher.update(file.content.as_bytes());
        hasher.finalize().into()
    }

    #[must_use]
    pub fn get(&self, key: &[u8; 32]) -> Option<FileExtraction> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    pub fn insert(&self, key: [u8; 32], extraction: FileExtraction) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key, extraction);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
