// src/lib.rs
//! `GapScan` core: frontend/backend integration gap analysis.
//!
//! Extracts API call sites and route registrations from raw source text,
//! matches them under a canonical `(path, method)` identity, reports the
//! unmatched remainder as gaps, ranks the call→endpoint graph by
//! criticality, and evaluates configurable quality gates over the result.

pub mod analysis;
pub mod cache;
pub mod cli;
pub mod config;
pub mod detection;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod extract;
pub mod gaps;
pub mod gate;
pub mod graph;
pub mod normalize;
pub mod reporting;
pub mod types;

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch; 0 if the clock is before it.
#[must_use]
pub fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
