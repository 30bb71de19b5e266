// src/detection.rs
//! Advisory framework detection.
//!
//! Inspects manifest files (`package.json`, `requirements.txt`) to name the
//! frameworks a project appears to use. Purely informational: every
//! extractor runs against every file of its extension set regardless,
//! since one repository can mix frameworks.

use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
    NestJs,
    Fastify,
    Express,
    FastApi,
    Flask,
    Django,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Svelte => "svelte",
            Self::NestJs => "nestjs",
            Self::Fastify => "fastify",
            Self::Express => "express",
            Self::FastApi => "fastapi",
            Self::Flask => "flask",
            Self::Django => "django",
        };
        f.write_str(name)
    }
}

/// Detects frameworks declared in a project root's manifests.
///
/// Returns an empty set when no manifest exists or none parses; detection
/// failure is never an error.
#[must_use]
pub fn detect_frameworks(project_root: &Path) -> BTreeSet<Framework> {
    let mut detected = BTreeSet::new();
    detect_node(project_root, &mut detected);
    detect_python(project_root, &mut detected);
    detected
}

fn detect_node(root: &Path, detected: &mut BTreeSet<Framework>) {
    let Ok(raw) = fs::read_to_string(root.join("package.json")) else {
        return;
    };
    let Ok(manifest) = serde_json::from_str::<Value>(&raw) else {
        return;
    };

    let has_dep = |name: &str| {
        ["dependencies", "devDependencies"]
            .iter()
            .any(|section| manifest.get(section).and_then(|d| d.get(name)).is_some())
    };

    if has_dep("react") || has_dep("react-dom") {
        detected.insert(Framework::React);
    }
    if has_dep("vue") {
        detected.insert(Framework::Vue);
    }
    if has_dep("@angular/core") {
        detected.insert(Framework::Angular);
    }
    if has_dep("svelte") {
        detected.insert(Framework::Svelte);
    }
    if has_dep("@nestjs/core") {
        detected.insert(Framework::NestJs);
    }
    if has_dep("fastify") {
        detected.insert(Framework::Fastify);
    }
    if has_dep("express") {
        detected.insert(Framework::Express);
    }
}

fn detect_python(root: &Path, detected: &mut BTreeSet<Framework>) {
    let Ok(requirements) = fs::read_to_string(root.join("requirements.txt")) else {
        return;
    };
    let requirements = requirements.to_ascii_lowercase();

    if requirements.contains("fastapi") {
        detected.insert(Framework::FastApi);
    }
    if requirements.contains("flask") {
        detected.insert(Framework::Flask);
    }
    if requirements.contains("django") {
        detected.insert(Framework::Django);
    }
}
