// src/types/positioned.rs
//! Layout output types consumed by the rendering layer.

use serde::{Deserialize, Serialize};

/// A node with final canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    pub id: String,
    pub label: String,
    pub doa_normalized: f64,
    pub degree: usize,
    pub x: f64,
    pub y: f64,
}

/// An edge with endpoints denormalized to full nodes, so renderers need no
/// secondary lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedEdge {
    pub source: PositionedNode,
    pub target: PositionedNode,
    pub weight: f64,
    pub normalized_weight: f64,
    pub spof_score: f64,
    pub collaboration_strength: f64,
}

/// The fully laid-out graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionedGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<PositionedEdge>,
}

/// A short natural-language observation about the filtered graph.
///
/// `id` is stable across recomputations so UI lists can diff by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInsight {
    pub id: String,
    pub text: String,
}

impl ChartInsight {
    #[must_use]
    pub fn new(id: &str, text: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            text: text.into(),
        }
    }
}
