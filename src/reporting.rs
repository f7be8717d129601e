// src/reporting.rs
//! Console output for the CLI adapter.

use colored::Colorize;

use crate::graph::OwnershipStats;
use crate::pipeline::PipelineResult;

/// Prints the insight list, one line per insight.
pub fn print_insights(result: &PipelineResult) {
    println!("{}", "Insights".bold());
    for insight in &result.insights {
        println!("  {} {}", "-".blue(), insight.text);
    }
}

/// Prints a dimmed one-line footer with the graph's shape.
pub fn print_summary(result: &PipelineResult) {
    let filtered = &result.filtered;
    println!(
        "{}",
        format!(
            "{} nodes placed, {} edges, {} isolated (of {} total)",
            result.positioned.nodes.len(),
            result.positioned.edges.len(),
            filtered.isolated_count,
            filtered.total_nodes,
        )
        .dimmed()
    );
}

/// Prints ownership build statistics.
pub fn print_ownership_stats(stats: &OwnershipStats) {
    println!(
        "{}",
        format!(
            "{} files, {} significant contributors, {} collaborating pairs",
            stats.files, stats.developers, stats.pairs,
        )
        .dimmed()
    );
}
