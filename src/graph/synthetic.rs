// src/graph/synthetic.rs
//! Deterministic synthetic collaboration graphs.
//!
//! Seeded entirely by the entity id, member names, and time range, so the
//! same team over the same window always renders the same graph. A ring
//! backbone guarantees the graph stays connected and interpretable at any
//! reasonable threshold even when no organic edge clears the affinity
//! cutoff.

use std::collections::HashSet;

use crate::graph::noise::{hash_seed, noise, RangeProfile};
use crate::graph::ownership::slug;
use crate::types::{Edge, Graph, Node, TimeRange};

/// Namespace token mixed into the module seed.
const SEED_PURPOSE: &str = "collaboration";

/// Ring edges never score below this, so the backbone survives any
/// threshold up to 0.7.
const RING_SPOF_FLOOR: f64 = 0.7;

/// Builds a synthetic graph for a team over a time range.
#[must_use]
pub fn build(entity_id: &str, members: &[String], range: TimeRange) -> Graph {
    let profile = RangeProfile::of(range);
    let module_seed =
        hash_seed(&format!("{entity_id}:{SEED_PURPOSE}:{}", range.key())) + profile.offset;

    let nodes = build_nodes(entity_id, members, module_seed, profile.volatility);
    let edges = build_edges(&nodes, module_seed, profile.affinity_cutoff);

    Graph { nodes, edges }
}

fn build_nodes(
    entity_id: &str,
    members: &[String],
    module_seed: f64,
    volatility: f64,
) -> Vec<Node> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut nodes = Vec::with_capacity(members.len());

    for (i, name) in members.iter().enumerate() {
        let seed = module_seed + hash_seed(&format!("{entity_id}:{name}:{i}"));
        let shift = (noise(seed + 0.5) - 0.5) * volatility;
        let doa = (0.05 + noise(seed) * 0.95 + shift).clamp(0.05, 1.0);

        let mut id = slug(name);
        if !seen.insert(id.clone()) {
            // Duplicate display names still get unique node ids.
            id = format!("{id}-{i}");
            seen.insert(id.clone());
        }

        nodes.push(Node {
            id,
            label: name.clone(),
            doa_normalized: doa,
        });
    }

    nodes
}

fn build_edges(nodes: &[Node], module_seed: f64, affinity_cutoff: f64) -> Vec<Edge> {
    let n = nodes.len();
    if n < 2 {
        return Vec::new();
    }

    let mut edges = Vec::new();
    let mut ring_pairs: HashSet<(usize, usize)> = HashSet::new();

    // Ring backbone: member i collaborates with member (i + 1) mod n.
    // Two members form a single edge, not two.
    let ring_len = if n == 2 { 1 } else { n };
    for i in 0..ring_len {
        let j = (i + 1) % n;
        ring_pairs.insert(ordered(i, j));
        edges.push(ring_edge(&nodes[i], &nodes[j], module_seed));
    }

    // Organic edges between all remaining pairs, gated by affinity.
    for i in 0..n {
        for j in (i + 1)..n {
            if ring_pairs.contains(&(i, j)) {
                continue;
            }
            let seed = pair_seed(&nodes[i], &nodes[j], module_seed);
            let affinity = noise(seed + 13.0);
            if affinity < affinity_cutoff {
                continue;
            }
            edges.push(organic_edge(&nodes[i], &nodes[j], seed, affinity));
        }
    }

    edges
}

fn ring_edge(a: &Node, b: &Node, module_seed: f64) -> Edge {
    let seed = pair_seed(a, b, module_seed);
    let spof = RING_SPOF_FLOOR + noise(seed) * (1.0 - RING_SPOF_FLOOR);
    let strength = 0.4 + noise(seed + 7.0) * 0.6;

    Edge {
        source: a.id.clone(),
        target: b.id.clone(),
        weight: strength,
        normalized_weight: strength,
        spof_score: spof,
        collaboration_strength: strength,
    }
}

fn organic_edge(a: &Node, b: &Node, seed: f64, affinity: f64) -> Edge {
    let avg_doa = (a.doa_normalized + b.doa_normalized) / 2.0;
    let spof = (avg_doa + (affinity - 0.5) * 0.3).clamp(0.0, 1.0);
    let strength = 0.3 + noise(seed + 29.0) * 0.7;

    Edge {
        source: a.id.clone(),
        target: b.id.clone(),
        weight: strength,
        normalized_weight: strength,
        spof_score: spof,
        collaboration_strength: strength,
    }
}

/// Symmetric pair seed: the ids are ordered so (a, b) and (b, a) agree.
fn pair_seed(a: &Node, b: &Node, module_seed: f64) -> f64 {
    let (first, second) = if a.id <= b.id { (a, b) } else { (b, a) };
    module_seed + hash_seed(&format!("{}:{}", first.id, second.id))
}

fn ordered(i: usize, j: usize) -> (usize, usize) {
    if i <= j {
        (i, j)
    } else {
        (j, i)
    }
}
