// src/layout/shell.rs
//! Concentric-shell layout: hubs innermost.
//!
//! Nodes are ranked by post-threshold degree and partitioned into three
//! rings, so the highest-degree contributors sit at the center of the
//! picture.

use crate::types::{FilteredNode, PositionedNode};

use super::place_ring;

const INNER_RADIUS: f64 = 80.0;
const MIDDLE_RADIUS: f64 = 165.0;
const OUTER_RADIUS: f64 = 245.0;

/// Fraction of nodes in the innermost and middle shells.
const INNER_SHARE: f64 = 0.20;
const MIDDLE_SHARE: f64 = 0.35;

#[must_use]
pub fn layout(nodes: &[FilteredNode], width: f64, height: f64) -> Vec<PositionedNode> {
    let mut ranked: Vec<&FilteredNode> = nodes.iter().collect();
    // Degree descending; id tie-break keeps the partition deterministic.
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.id.cmp(&b.id)));

    let n = ranked.len();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let inner_len = ((n as f64) * INNER_SHARE).ceil() as usize;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let middle_len = ((n as f64) * MIDDLE_SHARE).ceil() as usize;

    let inner_end = inner_len.min(n);
    let middle_end = (inner_end + middle_len).min(n);

    let (center_x, center_y) = (width / 2.0, height / 2.0);
    let mut result = Vec::with_capacity(n);
    result.extend(place_ring(&ranked[..inner_end], center_x, center_y, INNER_RADIUS));
    result.extend(place_ring(&ranked[inner_end..middle_end], center_x, center_y, MIDDLE_RADIUS));
    result.extend(place_ring(&ranked[middle_end..], center_x, center_y, OUTER_RADIUS));
    result
}
