// src/graph/criticality.rs
//! Iterative rank propagation over the dependency graph.
//!
//! A simplified PageRank: damping 0.85, exactly 10 passes (no convergence
//! check), uniform 1/N start. Known divergence from the textbook
//! algorithm: nodes with zero outgoing edges keep their rank mass instead
//! of redistributing it, so total mass leaks over iterations. That output
//! is pinned by tests; do not "fix" it without revisiting them.

use std::collections::{HashMap, VecDeque};

use super::model::{EdgeType, Graph, GraphNode};

pub const DAMPING: f64 = 0.85;
pub const ITERATIONS: usize = 10;

/// Annotates every node's `criticality_score` in place.
///
/// After the propagation passes, raw ranks are rescaled linearly so the
/// minimum maps to 0 and the maximum to 100. When every rank is identical
/// (an edge-free graph, for instance) there is no spread to express and
/// every node scores 0.
#[allow(clippy::cast_precision_loss)]
pub fn score(graph: &mut Graph) {
    let n = graph.nodes.len();
    if n == 0 {
        return;
    }

    // Work on node indices; ids only matter at the boundary.
    let index_of: HashMap<&str, usize> = graph
        .nodes
        .keys()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut out_degree: Vec<usize> = vec![0; n];
    for edge in &graph.edges {
        let (Some(&from), Some(&to)) = (
            index_of.get(edge.from.as_str()),
            index_of.get(edge.to.as_str()),
        ) else {
            continue;
        };
        incoming[to].push(from);
        out_degree[from] += 1;
    }

    let mut ranks = vec![1.0 / n as f64; n];
    for _ in 0..ITERATIONS {
        let mut next = vec![(1.0 - DAMPING) / n as f64; n];
        for (to, sources) in incoming.iter().enumerate() {
            for &from in sources {
                if out_degree[from] > 0 {
                    next[to] += DAMPING * ranks[from] / out_degree[from] as f64;
                }
            }
        }
        ranks = next;
    }

    let min = ranks.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ranks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;

    for (i, node) in graph.nodes.values_mut().enumerate() {
        node.criticality_score = if spread > 0.0 {
            (ranks[i] - min) / spread * 100.0
        } else {
            0.0
        };
    }
}

/// Top-`limit` nodes by criticality. Rust's stable sort keeps insertion
/// order between equal scores.
#[must_use]
pub fn critical_nodes(graph: &Graph, limit: usize) -> Vec<&GraphNode> {
    let mut nodes: Vec<&GraphNode> = graph.nodes.values().collect();
    nodes.sort_by(|a, b| {
        b.criticality_score
            .partial_cmp(&a.criticality_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    nodes.truncate(limit);
    nodes
}

/// Forward breadth-first traversal over `calls` edges from `node_id`,
/// including the start node. Cycles are cut by the visited set.
#[must_use]
pub fn impact_zone<'a>(graph: &'a Graph, node_id: &str) -> Vec<&'a GraphNode> {
    let mut visited: Vec<&str> = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(node_id);

    while let Some(current) = queue.pop_front() {
        if visited.contains(&current) {
            continue;
        }
        visited.push(current);

        for edge in &graph.edges {
            if edge.edge_type == EdgeType::Calls && edge.from == current {
                queue.push_back(edge.to.as_str());
            }
        }
    }

    visited
        .into_iter()
        .filter_map(|id| graph.nodes.get(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{GraphEdge, GraphNode, NodeType};

    fn node(id: &str) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            node_type: NodeType::Component,
            name: id.to_string(),
            file_path: "test.ts".into(),
            criticality_score: 0.0,
        }
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge {
            from: from.to_string(),
            to: to.to_string(),
            edge_type: EdgeType::Calls,
            weight: 5,
        }
    }

    #[test]
    fn test_empty_graph_is_untouched() {
        let mut graph = Graph::new();
        score(&mut graph);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_edge_free_graph_scores_all_zero() {
        let mut graph = Graph::new();
        graph.add_node(node("a"));
        graph.add_node(node("b"));
        score(&mut graph);
        // All raw ranks equal -> no spread -> everything maps to 0.
        assert!(graph.nodes.values().all(|n| n.criticality_score == 0.0));
    }

    #[test]
    fn test_chain_scores_are_bounded_and_peak_at_sink() {
        let mut graph = Graph::new();
        for id in ["a", "b", "c"] {
            graph.add_node(node(id));
        }
        graph.add_edge(edge("a", "b"));
        graph.add_edge(edge("b", "c"));
        score(&mut graph);

        for n in graph.nodes.values() {
            assert!((0.0..=100.0).contains(&n.criticality_score), "{} out of range", n.id);
        }
        assert_eq!(graph.nodes["a"].criticality_score, 0.0);
        assert_eq!(graph.nodes["c"].criticality_score, 100.0);
        let mid = graph.nodes["b"].criticality_score;
        assert!(mid > 0.0 && mid < 100.0, "middle of chain should sit between: {mid}");
    }

    #[test]
    fn test_self_loop_does_not_diverge() {
        let mut graph = Graph::new();
        graph.add_node(node("a"));
        graph.add_node(node("b"));
        graph.add_edge(edge("a", "a"));
        graph.add_edge(edge("a", "b"));
        score(&mut graph);
        for n in graph.nodes.values() {
            assert!((0.0..=100.0).contains(&n.criticality_score));
        }
    }
}
