//! Export a topology as a JSON snapshot.

use anyhow::{Context, Result};
use colored::Colorize;
use netsim::prelude::*;
use std::path::Path;

use crate::commands::open;
use crate::config::Config;

pub fn run(file: &str, output: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{} Loading {}...", "→".blue(), file);
    let topology = open(file, &config)?;

    export_json(&topology, Path::new(output))
        .with_context(|| format!("Failed to export to {}", output))?;

    println!();
    println!("{} Exported to {}", "✓".green().bold(), output.cyan());
    println!("  Nodes: {}", topology.node_count().to_string().cyan());
    println!("  Edges: {}", topology.edge_count().to_string().cyan());
    Ok(())
}
