//! Show topology statistics.

use anyhow::Result;
use colored::Colorize;

use crate::commands::open;
use crate::config::Config;

pub fn run(file: &str) -> Result<()> {
    let config = Config::load()?;
    let topology = open(file, &config)?;

    let nodes = topology.node_count();
    let edges = topology.edge_count();
    let avg_weight = if edges > 0 {
        topology.total_weight() as f64 / edges as f64
    } else {
        0.0
    };

    println!("{}", "Netsim Topology Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Total nodes:       {}", nodes.to_string().cyan());
    println!("  Total edges:       {}", edges.to_string().cyan());
    println!(
        "  Components:        {}",
        topology.connected_components().to_string().cyan()
    );
    println!();

    println!("{}", "Link Costs".blue().bold());
    println!("  Total weight:      {}", topology.total_weight());
    println!("  Avg edge weight:   {:.2}", avg_weight);
    println!();

    // Density calculation
    if nodes > 1 {
        let max_edges = (nodes * (nodes - 1)) / 2;
        let density = edges as f64 / max_edges as f64;
        println!("{}", "Density".blue().bold());
        println!("  Graph density:     {:.6}", density);
        println!();
    }

    println!("{}", "═".repeat(40).dimmed());
    Ok(())
}
