// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "busgraph", version, about = "Collaboration risk graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Configuration file (defaults to busgraph.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the collaboration graph from an ownership analysis artifact
    Analyze {
        /// JSON file of per-file ownership records
        input: PathBuf,
        /// Restrict to file paths containing this fragment
        #[arg(long)]
        module: Option<String>,
        /// Minimum per-file DOA for a contributor to count
        #[arg(long)]
        doa_threshold: Option<f64>,
        /// Minimum shared-file count for an edge
        #[arg(long)]
        min_shared: Option<usize>,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Generate a deterministic synthetic team graph
    Demo {
        /// Entity id seeding the generator
        #[arg(long)]
        team: String,
        /// Member display name (repeatable)
        #[arg(long = "member", required = true)]
        members: Vec<String>,
        /// Time window: 1m, 3m, 1y, or max
        #[arg(long, default_value = "3m")]
        range: String,
        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Filter/layout flags shared by both commands. Unset flags fall back to
/// the config file.
#[derive(Args)]
pub struct RenderArgs {
    /// Minimum spof score for an edge to survive
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Keep nodes with no surviving edges
    #[arg(long)]
    pub keep_isolated: bool,
    /// circular, shell, force, spring, or kamada_kawai
    #[arg(long)]
    pub layout: Option<String>,
    #[arg(long)]
    pub width: Option<f64>,
    #[arg(long)]
    pub height: Option<f64>,
    /// Write the positioned graph as JSON
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
