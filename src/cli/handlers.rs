// src/cli/handlers.rs
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::args::RenderArgs;
use crate::config::Config;
use crate::graph::{ownership, synthetic};
use crate::pipeline::{self, PipelineOptions, PipelineResult};
use crate::reporting;
use crate::types::{Graph, LayoutKind, OwnershipRecord, TimeRange};

pub fn handle_analyze(
    input: &Path,
    module: Option<&str>,
    doa_threshold: Option<f64>,
    min_shared: Option<usize>,
    render: &RenderArgs,
    config: &Config,
) -> Result<()> {
    let records = load_records(input)?;
    let built = ownership::build(
        &records,
        module.or(config.builder.module.as_deref()),
        doa_threshold.unwrap_or(config.builder.doa_threshold),
        min_shared.unwrap_or(config.builder.min_shared_files),
    );
    reporting::print_ownership_stats(&built.stats);
    render_graph(&built.graph, render, config)
}

pub fn handle_demo(
    team: &str,
    members: &[String],
    range: &str,
    render: &RenderArgs,
    config: &Config,
) -> Result<()> {
    let range: TimeRange = range.parse()?;
    let graph = synthetic::build(team, members, range);
    render_graph(&graph, render, config)
}

fn render_graph(graph: &Graph, render: &RenderArgs, config: &Config) -> Result<()> {
    let options = pipeline_options(render, config)?;
    let result = pipeline::run(graph, &options);
    reporting::print_insights(&result);
    reporting::print_summary(&result);
    write_output(render, &result)
}

fn pipeline_options(render: &RenderArgs, config: &Config) -> Result<PipelineOptions> {
    let layout = match &render.layout {
        Some(raw) => raw.parse::<LayoutKind>()?,
        None => config.render.layout,
    };
    Ok(PipelineOptions {
        threshold: render.threshold.unwrap_or(config.render.threshold),
        remove_isolated: config.render.remove_isolated && !render.keep_isolated,
        layout,
        width: render.width.unwrap_or(config.render.width),
        height: render.height.unwrap_or(config.render.height),
    })
}

fn load_records(path: &Path) -> Result<Vec<OwnershipRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    ownership::records_from_json(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_output(render: &RenderArgs, result: &PipelineResult) -> Result<()> {
    let Some(path) = &render.output else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(&result.positioned)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
