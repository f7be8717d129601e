// src/layout/mod.rs
//! Assigns 2D canvas coordinates to a filtered graph.
//!
//! Three interchangeable strategies behind one dispatch: `circular`,
//! `shell`, and the force simulation (`spring` / `kamada_kawai` tunings).
//! Every strategy is a pure function; identical inputs give byte-identical
//! coordinates.

use std::collections::HashMap;

use crate::types::{
    Edge, FilteredGraph, FilteredNode, LayoutKind, PositionedEdge, PositionedGraph, PositionedNode,
};

pub mod circular;
pub mod force;
pub mod shell;

pub use force::ForceTuning;

/// Margin kept clear around the canvas edge, in pixels.
pub const PADDING: f64 = 24.0;

/// Lays out a filtered graph on a `width` x `height` canvas.
///
/// All coordinates land inside the padding margin; edges are denormalized
/// to full positioned nodes, and edges with unresolvable endpoints are
/// silently dropped.
#[must_use]
pub fn position(
    graph: &FilteredGraph,
    width: f64,
    height: f64,
    kind: LayoutKind,
) -> PositionedGraph {
    let mut nodes = match kind {
        LayoutKind::Circular => circular::layout(&graph.nodes, width, height),
        LayoutKind::Shell => shell::layout(&graph.nodes, width, height),
        LayoutKind::Spring => force::layout(graph, width, height, &ForceTuning::spring()),
        LayoutKind::KamadaKawai => {
            force::layout(graph, width, height, &ForceTuning::kamada_kawai())
        }
    };

    for node in &mut nodes {
        node.x = clamp_axis(node.x, width);
        node.y = clamp_axis(node.y, height);
    }

    let edges = resolve_edges(&graph.edges, &nodes);
    PositionedGraph { nodes, edges }
}

/// Clamps one coordinate into `[PADDING, extent - PADDING]`.
fn clamp_axis(value: f64, extent: f64) -> f64 {
    value.clamp(PADDING, (extent - PADDING).max(PADDING))
}

pub(crate) fn positioned(node: &FilteredNode, x: f64, y: f64) -> PositionedNode {
    PositionedNode {
        id: node.id.clone(),
        label: node.label.clone(),
        doa_normalized: node.doa_normalized,
        degree: node.degree,
        x,
        y,
    }
}

/// Places nodes at equal angular spacing on one ring.
pub(crate) fn place_ring(
    nodes: &[&FilteredNode],
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> Vec<PositionedNode> {
    let n = nodes.len();
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = (i as f64 / n as f64) * std::f64::consts::TAU;
            positioned(
                node,
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Resolves edge endpoint ids to positioned nodes, dropping edges whose
/// endpoints are missing.
fn resolve_edges(edges: &[Edge], nodes: &[PositionedNode]) -> Vec<PositionedEdge> {
    let by_id: HashMap<&str, &PositionedNode> =
        nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    edges
        .iter()
        .filter_map(|edge| {
            let source = by_id.get(edge.source.as_str())?;
            let target = by_id.get(edge.target.as_str())?;
            Some(PositionedEdge {
                source: (*source).clone(),
                target: (*target).clone(),
                weight: edge.weight,
                normalized_weight: edge.normalized_weight,
                spof_score: edge.spof_score,
                collaboration_strength: edge.collaboration_strength,
            })
        })
        .collect()
}
