// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GapScanError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid gate config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GapScanError>;

impl From<serde_json::Error> for GapScanError {
    fn from(e: serde_json::Error) -> Self {
        GapScanError::Config(e.to_string())
    }
}
