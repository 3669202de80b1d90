//! CLI command implementations.

pub mod init;
pub mod table;
pub mod locate;
pub mod edit;
pub mod stats;
pub mod export;

use anyhow::{Context, Result};
use colored::Colorize;
use netsim::prelude::*;
use std::path::Path;

use crate::config::Config;

/// Load a topology file, laying it out with the configured spring layout.
pub fn open(file: &str, config: &Config) -> Result<Topology> {
    let mut topology = Topology::new();
    load(&mut topology, Path::new(file), &config.layout.provider())
        .with_context(|| format!("Failed to load {}", file))?;
    tracing::debug!(
        file,
        nodes = topology.node_count(),
        edges = topology.edge_count(),
        seed = config.layout.seed,
        "opened topology"
    );
    Ok(topology)
}

/// Write a topology back to its file.
pub fn store(topology: &Topology, file: &str) -> Result<()> {
    save(topology, Path::new(file)).with_context(|| format!("Failed to save {}", file))?;
    tracing::debug!(file, edges = topology.edge_count(), "stored topology");
    Ok(())
}

/// (destination, next hop, path cost) for every destination reachable from
/// `node`, sorted by destination. Empty for an unknown node.
pub fn forwarding_rows(topology: &Topology, node: &str) -> Vec<(String, String, u64)> {
    let distances = topology.shortest_distances(node);
    topology
        .forwarding_table(node)
        .into_iter()
        .map(|(dest, hop)| {
            let cost = distances.get(&dest).copied().unwrap_or_default();
            (dest, hop, cost)
        })
        .collect()
}

/// Print `node`'s forwarding table with path costs.
pub fn print_forwarding_table(topology: &Topology, node: &str) {
    let rows = forwarding_rows(topology, node);

    println!("{} {}", "Forwarding Table -".white().bold(), node.cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  {:<16} {:<16} {}", "Destination".bold(), "Next Hop".bold(), "Cost".bold());

    if rows.is_empty() {
        println!("  {}", "(no reachable destinations)".dimmed());
    }
    for (dest, hop, cost) in &rows {
        println!("  {:<16} {:<16} {}", dest, hop.green(), cost);
    }

    println!("{}", "═".repeat(40).dimmed());
}
