// tests/unit_insight.rs
//! Insight generator content and ordering.

use busgraph_core::graph::filter;
use busgraph_core::insight;
use busgraph_core::types::{Edge, Graph, Node};

fn node(id: &str, label: &str, doa: f64) -> Node {
    Node {
        id: id.into(),
        label: label.into(),
        doa_normalized: doa,
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

fn sample() -> Graph {
    Graph {
        nodes: vec![
            node("ada", "Ada", 0.9),
            node("grace", "Grace", 0.5),
            node("edsger", "Edsger", 0.4),
        ],
        edges: vec![edge("ada", "grace", 0.8), edge("ada", "edsger", 0.7)],
    }
}

#[test]
fn test_empty_graph_suggests_lowering_threshold() {
    let graph = sample();
    let filtered = filter::apply(&graph, 0.9, true);
    assert!(filtered.nodes.is_empty());

    let insights = insight::generate(&graph, &filtered, 0.9);

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].id, "no-survivors");
    assert!(insights[0].text.contains("Lower the threshold"));
}

#[test]
fn test_three_insights_in_order() {
    let graph = sample();
    let filtered = filter::apply(&graph, 0.5, true);

    let insights = insight::generate(&graph, &filtered, 0.5);

    let ids: Vec<&str> = insights.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["threshold-summary", "ownership-leader", "collaboration-hub"]
    );
}

#[test]
fn test_summary_reports_counts() {
    let graph = sample();
    let filtered = filter::apply(&graph, 0.5, true);

    let insights = insight::generate(&graph, &filtered, 0.5);
    let summary = &insights[0].text;

    assert!(summary.contains("3 of 3 contributors"), "got: {summary}");
    assert!(summary.contains("2 collaboration links"), "got: {summary}");
    assert!(summary.contains("(0 isolated)"), "got: {summary}");
}

#[test]
fn test_leader_and_hub_named() {
    let graph = sample();
    let filtered = filter::apply(&graph, 0.5, true);

    let insights = insight::generate(&graph, &filtered, 0.5);

    // Ada owns the most and, with degree 2, is also the hub.
    assert!(insights[1].text.contains("Ada"));
    assert!(insights[1].text.contains("90%"));

    let hub = &insights[2].text;
    assert!(hub.contains("Ada"), "got: {hub}");
    assert!(hub.contains("2 connections"), "got: {hub}");
    // Density 2/3, mean DOA (0.9 + 0.5 + 0.4) / 3.
    assert!(hub.contains("67%"), "got: {hub}");
    assert!(hub.contains("60%"), "got: {hub}");
}

#[test]
fn test_isolated_counted_in_summary() {
    let mut graph = sample();
    graph.nodes.push(node("loner", "Loner", 0.3));

    let filtered = filter::apply(&graph, 0.5, true);
    let insights = insight::generate(&graph, &filtered, 0.5);

    assert!(insights[0].text.contains("3 of 4 contributors"));
    assert!(insights[0].text.contains("(1 isolated)"));
}
