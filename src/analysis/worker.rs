// src/analysis/worker.rs
//! Per-file extraction worker.

use crate::cache::{ExtractionCache, FileExtraction};
use crate::extract::{extract_calls, extract_endpoints};
use crate::types::SourceFile;

/// Runs both extractors over one file, via the content-hash cache.
///
/// A file can legitimately contribute to both sides: `.ts`/`.js` are in
/// the frontend and the backend extension sets.
#[must_use]
pub fn extract_file(file: &SourceFile, cache: &ExtractionCache) -> FileExtraction {
    let key = ExtractionCache::digest(file);
    if let Some(hit) = cache.get(&key) {
        return hit;
    }

    let extraction = FileExtraction {
        calls: extract_calls(file),
        endpoints: extract_endpoints(file),
    };
    cache.insert(key, extraction.clone());
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_file_feeds_both_extractors() {
        let cache = ExtractionCache::new();
        let file = SourceFile::new(
            "api.ts",
            "app.get('/api/users', listUsers);\nfetch('/api/users');",
        );
        let extraction = extract_file(&file, &cache);
        assert_eq!(extraction.calls.len(), 1);
        assert_eq!(extraction.endpoints.len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_hit_short_circuits() {
        let cache = ExtractionCache::new();
        let file = SourceFile::new("a.tsx", "fetch('/x')");
        let first = extract_file(&file, &cache);
        let second = extract_file(&file, &cache);
        assert_eq!(first.calls.len(), second.calls.len());
        assert_eq!(cache.len(), 1);
    }
}
