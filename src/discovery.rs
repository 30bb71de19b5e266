// src/discovery.rs
//! CLI-side file discovery.
//!
//! The core analysis is traversal-agnostic and consumes `(path, content)`
//! pairs; this module is the collaborator that produces them for the
//! command-line tool. Unreadable files are logged and contribute nothing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::config::{
    BACKEND_NODE_EXTENSIONS, BACKEND_PYTHON_EXTENSIONS, FRONTEND_EXTENSIONS, PRUNE_DIRS,
};
use crate::types::SourceFile;

/// Walks `root` and loads every file with an analyzable extension.
#[must_use]
pub fn load_sources(root: &Path) -> Vec<SourceFile> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    let mut sources = Vec::new();
    for entry in walker.flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_analyzable_extension(path) {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(content) => sources.push(SourceFile::new(path.to_path_buf(), content)),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }
    sources
}

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn has_analyzable_extension(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    FRONTEND_EXTENSIONS.contains(&ext.as_str())
        || BACKEND_NODE_EXTENSIONS.contains(&ext.as_str())
        || BACKEND_PYTHON_EXTENSIONS.contains(&ext.as_str())
}

/// Groups discovered paths for display: (frontend-capable, backend-capable).
#[must_use]
pub fn partition_display(sources: &[SourceFile]) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut frontend = Vec::new();
    let mut backend = Vec::new();
    for source in sources {
        let ext = source.extension();
        if FRONTEND_EXTENSIONS.contains(&ext.as_str()) {
            frontend.push(source.path.clone());
        }
        if BACKEND_NODE_EXTENSIONS.contains(&ext.as_str())
            || BACKEND_PYTHON_EXTENSIONS.contains(&ext.as_str())
        {
            backend.push(source.path.clone());
        }
    }
    (frontend, backend)
}
