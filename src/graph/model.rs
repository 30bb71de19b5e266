// src/graph/model.rs
//! Graph data structures and the JSON export surface.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    File,
    Function,
    Class,
    Endpoint,
    Component,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Imports,
    Calls,
    Extends,
    References,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
    #[serde(rename = "filePath")]
    pub file_path: PathBuf,
    /// 0–100, filled in by the criticality pass.
    #[serde(rename = "criticalityScore")]
    pub criticality_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    /// 1–10.
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GraphMetadata {
    #[serde(rename = "totalNodes")]
    pub total_nodes: usize,
    #[serde(rename = "totalEdges")]
    pub total_edges: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: u128,
}

/// Rebuilt from scratch on every run; no incremental mutation.
///
/// Nodes live in an insertion-ordered map: ranking tie-breaks and the JSON
/// export both depend on that order being stable within a run.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: IndexMap<String, GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node unless one with the same id already exists.
    pub fn add_node(&mut self, node: GraphNode) {
        self.nodes.entry(node.id.clone()).or_insert(node);
    }

    /// Adds an edge. Both ends must name existing nodes; a dangling
    /// reference is a construction bug, so it is rejected rather than
    /// stored.
    pub fn add_edge(&mut self, edge: GraphEdge) {
        debug_assert!(self.nodes.contains_key(&edge.from), "dangling edge.from: {}", edge.from);
        debug_assert!(self.nodes.contains_key(&edge.to), "dangling edge.to: {}", edge.to);
        if self.nodes.contains_key(&edge.from) && self.nodes.contains_key(&edge.to) {
            self.edges.push(edge);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serializes nodes, edges, and run metadata as pretty JSON.
    #[must_use]
    pub fn export_json(&self) -> String {
        let export = serde_json::json!({
            "nodes": self.nodes.values().collect::<Vec<_>>(),
            "edges": self.edges,
            "metadata": self.metadata(),
        });
        serde_json::to_string_pretty(&export).unwrap_or_else(|_| "{}".to_string())
    }

    #[must_use]
    pub fn metadata(&self) -> GraphMetadata {
        GraphMetadata {
            total_nodes: self.nodes.len(),
            total_edges: self.edges.len(),
            generated_at: crate::epoch_millis(),
        }
    }
}
