// src/pipeline.rs
//! One-call orchestration: filter, layout, and insights over a built graph.

use crate::graph::filter;
use crate::insight;
use crate::layout;
use crate::types::{ChartInsight, FilteredGraph, Graph, LayoutKind, PositionedGraph};

/// Everything the downstream stages need beyond the graph itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    /// Minimum `spof_score` for an edge to survive.
    pub threshold: f64,
    pub remove_isolated: bool,
    pub layout: LayoutKind,
    pub width: f64,
    pub height: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            remove_isolated: true,
            layout: LayoutKind::Spring,
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub filtered: FilteredGraph,
    pub positioned: PositionedGraph,
    pub insights: Vec<ChartInsight>,
}

/// Runs filter → layout and filter → insights over a built graph.
///
/// Pure and synchronous; recompute wholesale whenever the data, threshold,
/// time range, or canvas changes.
#[must_use]
pub fn run(graph: &Graph, options: &PipelineOptions) -> PipelineResult {
    let filtered = filter::apply(graph, options.threshold, options.remove_isolated);
    let positioned = layout::position(&filtered, options.width, options.height, options.layout);
    let insights = insight::generate(graph, &filtered, options.threshold);

    PipelineResult {
        filtered,
        positioned,
        insights,
    }
}
