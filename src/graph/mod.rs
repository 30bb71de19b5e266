// src/graph/mod.rs
//! Weighted dependency graph over extracted calls and endpoints, plus the
//! criticality ranking that runs over it.

pub mod builder;
pub mod criticality;
pub mod model;

pub use model::{Graph, GraphEdge, GraphNode};

use crate::types::{APICall, Endpoint, GapItem};

/// Builds the call→endpoint graph and annotates criticality scores.
#[must_use]
pub fn build_scored(gaps: &[GapItem], endpoints: &[Endpoint], calls: &[APICall]) -> Graph {
    let mut graph = builder::build(gaps, endpoints, calls);
    criticality::score(&mut graph);
    graph
}
