// src/types.rs
//! Common data structures shared across extraction, matching, and reporting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// HTTP methods recognized by the call extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Parses a method token case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "PATCH" => Some(Self::Patch),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single API call site extracted from frontend source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct APICall {
    /// Raw path as written at the call site (query string and `${}` already cleaned).
    pub endpoint: String,
    pub method: HttpMethod,
    pub file: PathBuf,
    /// 1-based line number of the call site.
    pub line: usize,
    /// Best-effort component name (file stem).
    pub component: String,
}

/// A single route registration extracted from backend source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Raw route path (parameter converters already collapsed to `:id`).
    pub path: String,
    /// Uppercased method token. A string rather than an enum: Flask route
    /// lists may carry methods the call extractors never produce.
    pub method: String,
    pub file: PathBuf,
    pub line: usize,
    /// Best-effort handler function name.
    pub handler: String,
}

/// Gap classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapType {
    OrphanedComponent,
    UnusedEndpoint,
    TypeMismatch,
    MissingCrud,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Lowercase form used by the quality-gate field convention.
    #[must_use]
    pub fn as_gate_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A single detected integration gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapItem {
    #[serde(rename = "type")]
    pub gap_type: GapType,
    pub severity: Severity,
    pub message: String,
    pub file: PathBuf,
    pub line: usize,
    #[serde(rename = "suggestedFix", skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
    #[serde(rename = "relatedFiles", skip_serializing_if = "Option::is_none")]
    pub related_files: Option<Vec<PathBuf>>,
}

/// Severity histogram over a gap list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "totalGaps")]
    pub total_gaps: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    #[must_use]
    pub fn from_gaps(gaps: &[GapItem]) -> Self {
        let mut summary = Self {
            total_gaps: gaps.len(),
            ..Self::default()
        };
        for gap in gaps {
            match gap.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }
}

/// Aggregated output of a full analysis run. JSON-stable surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub gaps: Vec<GapItem>,
    #[serde(rename = "apiCalls")]
    pub api_calls: Vec<APICall>,
    pub endpoints: Vec<Endpoint>,
    /// Epoch milliseconds at completion.
    pub timestamp: u128,
    pub summary: Summary,
}

/// One input file: the core never reads the filesystem itself.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Lowercased file extension, empty when absent.
    #[must_use]
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default()
    }
}
