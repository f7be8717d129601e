// src/layout/circular.rs
//! Single-ring layout: all nodes on one circle at equal angular spacing.

use crate::types::{FilteredNode, PositionedNode};

use super::place_ring;

/// Ring radius as a fraction of the smaller canvas dimension.
const RADIUS_RATIO: f64 = 0.37;
const MIN_RADIUS: f64 = 90.0;

#[must_use]
pub fn layout(nodes: &[FilteredNode], width: f64, height: f64) -> Vec<PositionedNode> {
    let refs: Vec<&FilteredNode> = nodes.iter().collect();
    place_ring(&refs, width / 2.0, height / 2.0, radius(width, height))
}

#[must_use]
pub fn radius(width: f64, height: f64) -> f64 {
    (width.min(height) * RADIUS_RATIO).max(MIN_RADIUS)
}
