// src/config.rs
//! Extension routing constants and the quality-gate threshold config.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{GapScanError, Result};

/// Files the call extractor will look at.
pub const FRONTEND_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "vue"];

/// Files the Node-framework endpoint matchers run against.
pub const BACKEND_NODE_EXTENSIONS: &[&str] = &["ts", "js"];

/// Files the Python-framework endpoint matchers run against.
pub const BACKEND_PYTHON_EXTENSIONS: &[&str] = &["py"];

/// Directories the CLI walker never descends into.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "target",
    ".venv",
    "venv",
    ".tox",
    ".cache",
    "coverage",
    "vendor",
    "third_party",
    "__pycache__",
];

/// Thresholds for the quality-gate evaluation.
///
/// Every field is required at evaluation time; caller overrides are merged
/// field-by-field over these defaults, and a malformed field falls back to
/// its default rather than failing the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGateConfig {
    pub max_critical_gaps: usize,
    pub max_high_gaps: usize,
    /// Fraction in 0–1.
    pub min_coverage: f64,
    pub max_complexity_score: f64,
    pub required_remediations: usize,
}

impl Default for QualityGateConfig {
    fn default() -> Self {
        Self {
            max_critical_gaps: 0,
            max_high_gaps: 3,
            min_coverage: 0.80,
            max_complexity_score: 8.5,
            required_remediations: 10,
        }
    }
}

impl QualityGateConfig {
    /// Builds a config from a JSON object, shallow-merging any recognized
    /// fields over the defaults. Unknown fields are ignored; fields of the
    /// wrong type keep their default.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let mut config = Self::default();
        let Some(obj) = value.as_object() else {
            return config;
        };

        if let Some(v) = obj.get("maxCriticalGaps").and_then(as_count) {
            config.max_critical_gaps = v;
        }
        if let Some(v) = obj.get("maxHighGaps").and_then(as_count) {
            config.max_high_gaps = v;
        }
        if let Some(v) = obj.get("minCoverage").and_then(Value::as_f64) {
            config.min_coverage = v;
        }
        if let Some(v) = obj.get("maxComplexityScore").and_then(Value::as_f64) {
            config.max_complexity_score = v;
        }
        if let Some(v) = obj.get("requiredRemediations").and_then(as_count) {
            config.required_remediations = v;
        }
        config
    }

    /// Reads a threshold file from disk and merges it over the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| GapScanError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let value: Value = serde_json::from_str(&raw)?;
        Ok(Self::from_json(&value))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn as_count(value: &Value) -> Option<usize> {
    value.as_u64().map(|v| v as usize)
}
