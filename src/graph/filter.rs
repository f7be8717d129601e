// src/graph/filter.rs
//! Risk-threshold filtering of the collaboration graph.

use std::collections::{HashMap, HashSet};

use crate::types::{FilteredGraph, FilteredNode, Graph};

/// Keeps edges whose `spof_score` clears `threshold`, recomputes per-node
/// degree, and optionally drops isolated nodes.
///
/// Raising the threshold only ever removes edges; the surviving edge set at
/// a higher threshold is a subset of the set at any lower one.
#[must_use]
pub fn apply(graph: &Graph, threshold: f64, remove_isolated: bool) -> FilteredGraph {
    let node_ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

    // Edges with endpoints missing from the node set are dropped here; the
    // builder invariant makes that unreachable in practice.
    let surviving: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.spof_score >= threshold)
        .filter(|e| node_ids.contains(e.source.as_str()) && node_ids.contains(e.target.as_str()))
        .collect();

    let mut degree: HashMap<&str, usize> = graph
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), 0))
        .collect();
    for edge in &surviving {
        *degree.entry(edge.source.as_str()).or_insert(0) += 1;
        *degree.entry(edge.target.as_str()).or_insert(0) += 1;
    }

    let isolated_count = graph
        .nodes
        .iter()
        .filter(|n| degree.get(n.id.as_str()) == Some(&0))
        .count();

    let nodes: Vec<FilteredNode> = graph
        .nodes
        .iter()
        .filter_map(|n| {
            let d = degree.get(n.id.as_str()).copied().unwrap_or(0);
            if remove_isolated && d == 0 {
                return None;
            }
            Some(FilteredNode {
                id: n.id.clone(),
                label: n.label.clone(),
                doa_normalized: n.doa_normalized,
                degree: d,
            })
        })
        .collect();

    let kept_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let edges = surviving
        .into_iter()
        .filter(|e| kept_ids.contains(e.source.as_str()) && kept_ids.contains(e.target.as_str()))
        .cloned()
        .collect();

    FilteredGraph {
        nodes,
        edges,
        total_nodes: graph.nodes.len(),
        isolated_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Node};

    fn node(id: &str) -> Node {
        Node {
            id: id.into(),
            label: id.into(),
            doa_normalized: 0.5,
        }
    }

    fn edge(source: &str, target: &str, spof: f64) -> Edge {
        Edge {
            source: source.into(),
            target: target.into(),
            weight: 1.0,
            normalized_weight: 1.0,
            spof_score: spof,
            collaboration_strength: 0.5,
        }
    }

    #[test]
    fn test_degree_sum_is_twice_edge_count() {
        let graph = Graph {
            nodes: vec![node("a"), node("b"), node("c")],
            edges: vec![edge("a", "b", 0.9), edge("b", "c", 0.6), edge("a", "c", 0.2)],
        };

        let filtered = apply(&graph, 0.5, true);

        let degree_sum: usize = filtered.nodes.iter().map(|n| n.degree).sum();
        assert_eq!(degree_sum, 2 * filtered.edges.len());
    }

    #[test]
    fn test_isolates_counted_before_removal() {
        let graph = Graph {
            nodes: vec![node("a"), node("b"), node("loner")],
            edges: vec![edge("a", "b", 0.9)],
        };

        let removed = apply(&graph, 0.5, true);
        assert_eq!(removed.nodes.len(), 2);
        assert_eq!(removed.isolated_count, 1);
        assert_eq!(removed.total_nodes, 3);

        let kept = apply(&graph, 0.5, false);
        assert_eq!(kept.nodes.len(), 3);
        assert_eq!(kept.isolated_count, 1);
    }

    #[test]
    fn test_dangling_edge_dropped() {
        let graph = Graph {
            nodes: vec![node("a"), node("b")],
            edges: vec![edge("a", "ghost", 0.9), edge("a", "b", 0.9)],
        };

        let filtered = apply(&graph, 0.0, false);
        assert_eq!(filtered.edges.len(), 1);
        assert_eq!(filtered.edges[0].target, "b");
    }
}
