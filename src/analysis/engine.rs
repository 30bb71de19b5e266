// src/analysis/engine.rs
//! Main execution logic for the `GapScan` analysis engine.

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::cache::ExtractionCache;
use crate::gaps;
use crate::types::{APICall, AnalysisResult, Endpoint, SourceFile, Summary};

use super::worker;

/// Orchestrates extraction over a set of input files and the downstream
/// whole-set passes. Holds the extraction cache so repeat runs over
/// unchanged content are cheap.
#[derive(Debug, Default)]
pub struct Engine {
    cache: ExtractionCache,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the full analysis over the given files.
    ///
    /// Extraction is parallel and per-file; gap detection runs strictly
    /// after the join, over the complete call and endpoint sets.
    #[must_use]
    pub fn analyze(&self, files: &[SourceFile]) -> AnalysisResult {
        let started = std::time::Instant::now();
        let (api_calls, endpoints) = self.extract_all(files);
        debug!(
            calls = api_calls.len(),
            endpoints = endpoints.len(),
            files = files.len(),
            "extraction complete"
        );

        let gaps = gaps::detect(&api_calls, &endpoints);
        let summary = Summary::from_gaps(&gaps);
        debug!(
            gaps = gaps.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis complete"
        );

        AnalysisResult {
            gaps,
            api_calls,
            endpoints,
            timestamp: crate::epoch_millis(),
            summary,
        }
    }

    /// Parallel extraction phase. Results are appended in file order to
    /// keep runs deterministic.
    fn extract_all(&self, files: &[SourceFile]) -> (Vec<APICall>, Vec<Endpoint>) {
        let extractions: Vec<_> = files
            .par_iter()
            .map(|file| worker::extract_file(file, &self.cache))
            .collect();

        let mut api_calls = Vec::new();
        let mut endpoints = Vec::new();
        for extraction in extractions {
            api_calls.extend(extraction.calls);
            endpoints.extend(extraction.endpoints);
        }
        (api_calls, endpoints)
    }
}
