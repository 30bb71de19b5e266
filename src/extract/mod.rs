// src/extract/mod.rs
//! Pattern-based extraction of API calls and endpoints from raw source text.
//!
//! No AST, no type resolution: every matcher is a regex over single lines
//! (with small fixed lookahead windows where a value spills onto following
//! lines). Extraction is a pure function of file content, which is what
//! makes the per-file phase embarrassingly parallel and content-hash
//! cacheable.

pub mod calls;
pub mod endpoints;

pub use calls::extract_calls;
pub use endpoints::extract_endpoints;
