// src/layout/force.rs
//! Force-directed layout.
//!
//! A classic simulation: link springs whose rest length shrinks as the
//! edge's spof score grows, many-body repulsion between all pairs, a
//! centering pull, and degree-scaled collision avoidance. Runs a fixed
//! number of damped Euler ticks with no convergence detection, then the
//! dispatcher clamps everything into the padded canvas.
//!
//! There is no randomness anywhere: initial placement is a phyllotaxis
//! spiral and coincident nodes are separated by an index-derived offset,
//! so the same graph always lands on the same coordinates.

use std::collections::HashMap;

use crate::types::{FilteredGraph, PositionedNode};

use super::positioned;

/// Tuning constants distinguishing the two force-family variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceTuning {
    /// Rest length of a zero-risk link.
    pub base_distance: f64,
    pub link_strength: f64,
    /// Simulation steps; the tighter variant needs more to settle.
    pub ticks: usize,
}

impl ForceTuning {
    #[must_use]
    pub fn spring() -> Self {
        Self {
            base_distance: 140.0,
            link_strength: 0.55,
            ticks: 260,
        }
    }

    #[must_use]
    pub fn kamada_kawai() -> Self {
        Self {
            base_distance: 110.0,
            link_strength: 0.8,
            ticks: 360,
        }
    }
}

const REPULSION: f64 = 2400.0;
const CENTER_STRENGTH: f64 = 0.05;
const MIN_LINK_DISTANCE: f64 = 30.0;
/// How much a maximal-risk edge shortens its rest length.
const SPOF_PULL: f64 = 0.6;
const COLLISION_BASE: f64 = 16.0;
const COLLISION_PER_DEGREE: f64 = 1.8;
const INITIAL_RADIUS: f64 = 14.0;
/// Per-tick movement cap; keeps near-coincident nodes from being launched
/// off-canvas by the inverse-square repulsion.
const MAX_STEP: f64 = 30.0;
const EPSILON: f64 = 1e-6;

#[must_use]
pub fn layout(
    graph: &FilteredGraph,
    width: f64,
    height: f64,
    tuning: &ForceTuning,
) -> Vec<PositionedNode> {
    let n = graph.nodes.len();
    if n == 0 {
        return Vec::new();
    }

    let index: HashMap<&str, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect();

    // Dangling endpoints are dropped from the simulation, mirroring the
    // dispatcher's edge resolution.
    let links: Vec<(usize, usize, f64)> = graph
        .edges
        .iter()
        .filter_map(|e| {
            let i = *index.get(e.source.as_str())?;
            let j = *index.get(e.target.as_str())?;
            Some((i, j, e.spof_score))
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let radii: Vec<f64> = graph
        .nodes
        .iter()
        .map(|node| COLLISION_BASE + node.degree as f64 * COLLISION_PER_DEGREE)
        .collect();

    let mut pos = initial_positions(n, width / 2.0, height / 2.0);

    #[allow(clippy::cast_precision_loss)]
    for tick in 0..tuning.ticks {
        let alpha = 1.0 - tick as f64 / tuning.ticks as f64;
        step(&mut pos, &links, &radii, width / 2.0, height / 2.0, tuning, alpha);
    }

    graph
        .nodes
        .iter()
        .zip(&pos)
        .map(|(node, &(x, y))| positioned(node, x, y))
        .collect()
}

/// Phyllotaxis spiral around the canvas center — the deterministic seeding
/// force layouts conventionally start from.
#[allow(clippy::cast_precision_loss)]
fn initial_positions(n: usize, center_x: f64, center_y: f64) -> Vec<(f64, f64)> {
    let golden = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    (0..n)
        .map(|i| {
            let radius = INITIAL_RADIUS * (i as f64 + 0.5).sqrt();
            let angle = i as f64 * golden;
            (
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            )
        })
        .collect()
}

fn step(
    pos: &mut [(f64, f64)],
    links: &[(usize, usize, f64)],
    radii: &[f64],
    center_x: f64,
    center_y: f64,
    tuning: &ForceTuning,
    alpha: f64,
) {
    let n = pos.len();
    let mut disp = vec![(0.0_f64, 0.0_f64); n];

    // Link springs: riskier collaboration pulls its endpoints closer.
    for &(i, j, spof) in links {
        let (dx, dy, dist) = separation(pos[i], pos[j], i, j);
        let target = (tuning.base_distance * (1.0 - spof * SPOF_PULL)).max(MIN_LINK_DISTANCE);
        let pull = (dist - target) / dist * tuning.link_strength * 0.5;
        disp[i].0 += dx * pull;
        disp[i].1 += dy * pull;
        disp[j].0 -= dx * pull;
        disp[j].1 -= dy * pull;
    }

    // Many-body repulsion over all pairs.
    for i in 0..n {
        for j in (i + 1)..n {
            let (dx, dy, dist) = separation(pos[i], pos[j], i, j);
            let push = REPULSION / (dist * dist);
            let (ux, uy) = (dx / dist, dy / dist);
            disp[i].0 -= ux * push;
            disp[i].1 -= uy * push;
            disp[j].0 += ux * push;
            disp[j].1 += uy * push;
        }
    }

    // Centering.
    for (i, d) in disp.iter_mut().enumerate() {
        d.0 += (center_x - pos[i].0) * CENTER_STRENGTH;
        d.1 += (center_y - pos[i].1) * CENTER_STRENGTH;
    }

    // Collision avoidance: per-node radius grows with degree.
    for i in 0..n {
        for j in (i + 1)..n {
            let (dx, dy, dist) = separation(pos[i], pos[j], i, j);
            let overlap = radii[i] + radii[j] - dist;
            if overlap <= 0.0 {
                continue;
            }
            let push = overlap / 2.0 * 0.5;
            let (ux, uy) = (dx / dist, dy / dist);
            disp[i].0 -= ux * push;
            disp[i].1 -= uy * push;
            disp[j].0 += ux * push;
            disp[j].1 += uy * push;
        }
    }

    for (p, d) in pos.iter_mut().zip(&disp) {
        let (mut dx, mut dy) = (d.0 * alpha, d.1 * alpha);
        let len = (dx * dx + dy * dy).sqrt();
        if len > MAX_STEP {
            dx *= MAX_STEP / len;
            dy *= MAX_STEP / len;
        }
        p.0 += dx;
        p.1 += dy;
    }
}

/// Vector from node i to node j with a safe minimum distance. Coincident
/// nodes are nudged apart by an index-derived offset so the simulation
/// stays deterministic.
#[allow(clippy::cast_precision_loss)]
fn separation(a: (f64, f64), b: (f64, f64), i: usize, j: usize) -> (f64, f64, f64) {
    let mut dx = b.0 - a.0;
    let mut dy = b.1 - a.1;
    let mut dist = (dx * dx + dy * dy).sqrt();
    if dist < EPSILON {
        dx = (j as f64 - i as f64) * 1e-4;
        dy = 1e-4;
        dist = (dx * dx + dy * dy).sqrt();
    }
    (dx, dy, dist)
}
