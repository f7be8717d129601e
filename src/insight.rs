// src/insight.rs
//! Natural-language insights over a filtered collaboration graph.

use crate::types::{ChartInsight, FilteredGraph, FilteredNode, Graph};

/// Summarizes the filtered graph as an ordered list of short insights.
///
/// The pre-filter `graph` supplies the total contributor count; ids are
/// stable so UI lists can diff by key.
#[must_use]
pub fn generate(graph: &Graph, filtered: &FilteredGraph, threshold: f64) -> Vec<ChartInsight> {
    if filtered.nodes.is_empty() {
        return vec![ChartInsight::new(
            "no-survivors",
            format!(
                "No collaborations clear a risk threshold of {threshold:.2}. \
                 Lower the threshold to reveal the network."
            ),
        )];
    }

    let leader = max_by_doa(&filtered.nodes);
    let hub = max_by_degree(&filtered.nodes);
    let mean_doa = mean(filtered.nodes.iter().map(|n| n.doa_normalized));
    let density = edge_density(filtered.nodes.len(), filtered.edges.len());

    vec![
        ChartInsight::new(
            "threshold-summary",
            format!(
                "At a risk threshold of {threshold:.2}, {} of {} contributors remain connected \
                 by {} collaboration {} ({} isolated).",
                filtered.nodes.len(),
                graph.nodes.len(),
                filtered.edges.len(),
                plural(filtered.edges.len(), "link", "links"),
                filtered.isolated_count,
            ),
        ),
        ChartInsight::new(
            "ownership-leader",
            format!(
                "{} carries the highest ownership concentration at {:.0}%.",
                leader.label,
                leader.doa_normalized * 100.0,
            ),
        ),
        ChartInsight::new(
            "collaboration-hub",
            format!(
                "{} is the collaboration hub with {} {}; network density is {:.0}% \
                 and mean ownership concentration is {:.0}%.",
                hub.label,
                hub.degree,
                plural(hub.degree, "connection", "connections"),
                density * 100.0,
                mean_doa * 100.0,
            ),
        ),
    ]
}

/// Surviving edges over the maximum possible `n * (n - 1) / 2`; zero for
/// graphs too small to have pairs.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn edge_density(nodes: usize, edges: usize) -> f64 {
    if nodes < 2 {
        return 0.0;
    }
    let possible = (nodes * (nodes - 1) / 2) as f64;
    edges as f64 / possible
}

fn max_by_doa(nodes: &[FilteredNode]) -> &FilteredNode {
    let mut best = &nodes[0];
    for node in &nodes[1..] {
        if node.doa_normalized > best.doa_normalized {
            best = node;
        }
    }
    best
}

fn max_by_degree(nodes: &[FilteredNode]) -> &FilteredNode {
    let mut best = &nodes[0];
    for node in &nodes[1..] {
        if node.degree > best.degree {
            best = node;
        }
    }
    best
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_degenerate_cases() {
        assert_eq!(edge_density(0, 0), 0.0);
        assert_eq!(edge_density(1, 0), 0.0);
        assert!((edge_density(3, 3) - 1.0).abs() < f64::EPSILON);
    }
}
