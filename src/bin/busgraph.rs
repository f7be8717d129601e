// src/bin/busgraph.rs
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use busgraph_core::cli::{handlers, Cli, Commands};
use busgraph_core::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load(Path::new("busgraph.toml"))?,
    };

    match &cli.command {
        Commands::Analyze {
            input,
            module,
            doa_threshold,
            min_shared,
            render,
        } => handlers::handle_analyze(
            input,
            module.as_deref(),
            *doa_threshold,
            *min_shared,
            render,
            &config,
        ),
        Commands::Demo {
            team,
            members,
            range,
            render,
        } => handlers::handle_demo(team, members, range, render, &config),
    }
}
