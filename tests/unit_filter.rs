// tests/unit_filter.rs
//! Threshold filter invariants.

use std::collections::HashSet;

use busgraph_core::graph::{filter, synthetic};
use busgraph_core::types::TimeRange;

fn sample() -> busgraph_core::types::Graph {
    let members: Vec<String> = ["Ada", "Grace", "Edsger", "Barbara", "Donald", "Tony", "Leslie", "Frances"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    synthetic::build("team-compilers", &members, TimeRange::OneYear)
}

#[test]
fn test_degree_sum_is_twice_edge_count() {
    let graph = sample();
    for threshold in [0.0, 0.3, 0.5, 0.8] {
        let filtered = filter::apply(&graph, threshold, true);
        let degree_sum: usize = filtered.nodes.iter().map(|n| n.degree).sum();
        assert_eq!(
            degree_sum,
            2 * filtered.edges.len(),
            "identity broken at threshold {threshold}"
        );
    }
}

#[test]
fn test_raising_threshold_only_removes_edges() {
    let graph = sample();
    let thresholds = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

    let mut previous: Option<HashSet<(String, String)>> = None;
    for threshold in thresholds {
        let filtered = filter::apply(&graph, threshold, false);
        let keys: HashSet<(String, String)> = filtered
            .edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect();

        if let Some(lower) = &previous {
            assert!(
                keys.is_subset(lower),
                "edges appeared when raising the threshold to {threshold}"
            );
        }
        previous = Some(keys);
    }
}

#[test]
fn test_threshold_above_all_scores_isolates_everyone() {
    let graph = sample();

    let kept = filter::apply(&graph, 1.01, false);
    assert_eq!(kept.nodes.len(), graph.nodes.len());
    assert!(kept.edges.is_empty());
    assert_eq!(kept.isolated_count, graph.nodes.len());
    assert!(kept.nodes.iter().all(|n| n.degree == 0));

    let removed = filter::apply(&graph, 1.01, true);
    assert!(removed.nodes.is_empty());
    assert_eq!(removed.total_nodes, graph.nodes.len());
    assert_eq!(removed.isolated_count, graph.nodes.len());
}

#[test]
fn test_filtered_counts_describe_prefilter_graph() {
    let graph = sample();
    let filtered = filter::apply(&graph, 0.5, true);

    assert_eq!(filtered.total_nodes, graph.nodes.len());
    assert_eq!(
        filtered.nodes.len() + filtered.isolated_count,
        filtered.total_nodes
    );
}
