// src/graph/builder.rs
//! Graph construction from extracted calls and endpoints.
//!
//! One ENDPOINT node per unique canonical `(path, method)`, one COMPONENT
//! node per unique call site `(file, line)`, and a `calls` edge wherever a
//! call's canonical key matches an endpoint node. Orphaned calls get a node
//! but no edge. Edge weight is a fixed 5 — call frequency does not feed
//! into it.

use crate::normalize::normalize;
use crate::types::{APICall, Endpoint, GapItem};

use super::model::{EdgeType, Graph, GraphEdge, GraphNode, NodeType};

/// Every `calls` edge carries this weight.
pub const CALL_EDGE_WEIGHT: u32 = 5;

#[must_use]
pub fn build(_gaps: &[GapItem], endpoints: &[Endpoint], calls: &[APICall]) -> Graph {
    let mut graph = Graph::new();

    for endpoint in endpoints {
        graph.add_node(GraphNode {
            id: endpoint_id(&endpoint.path, &endpoint.method),
            node_type: NodeType::Endpoint,
            name: format!("{} {}", endpoint.method, endpoint.path),
            file_path: endpoint.file.clone(),
            criticality_score: 0.0,
        });
    }

    for call in calls {
        let call_id = component_id(call);
        graph.add_node(GraphNode {
            id: call_id.clone(),
            node_type: NodeType::Component,
            name: format!("{} {}", call.method, call.endpoint),
            file_path: call.file.clone(),
            criticality_score: 0.0,
        });

        let target = endpoint_id(&call.endpoint, call.method.as_str());
        if graph.nodes.contains_key(&target) {
            graph.add_edge(GraphEdge {
                from: call_id,
                to: target,
                edge_type: EdgeType::Calls,
                weight: CALL_EDGE_WEIGHT,
            });
        }
    }

    graph
}

/// Endpoint node identity: canonical path + method, so a call written as
/// `/users/${id}` lands on the node registered as `/users/:userId`.
fn endpoint_id(path: &str, method: &str) -> String {
    format!("endpoint:{}:{}", normalize(path), method)
}

fn component_id(call: &APICall) -> String {
    format!("call:{}:{}", call.file.display(), call.line)
}
