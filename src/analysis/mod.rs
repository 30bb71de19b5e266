// src/analysis/mod.rs
//! Analysis orchestration: parallel per-file extraction, then the
//! whole-set passes (gap detection, graph, scoring).

pub mod engine;
pub mod worker;

pub use engine::Engine;
