//! Spatial lookups against a laid-out topology.

use anyhow::Result;
use colored::Colorize;

use crate::commands::{open, print_forwarding_table};
use crate::config::Config;

pub fn positions(file: &str) -> Result<()> {
    let config = Config::load()?;
    let topology = open(file, &config)?;

    for name in topology.nodes() {
        match topology.position(name) {
            Some(p) => println!("  {:<16} ({:>8.4}, {:>8.4})", name.cyan(), p.x, p.y),
            None => println!("  {:<16} {}", name.cyan(), "(unplaced)".dimmed()),
        }
    }
    Ok(())
}

pub fn node(file: &str, x: f64, y: f64) -> Result<()> {
    let config = Config::load()?;
    let topology = open(file, &config)?;

    match topology.find_nearest_node_within(x, y, config.spatial.node_threshold_sq) {
        Some(name) => {
            println!("{} Picked {}", "✓".green().bold(), name.cyan().bold());
            println!();
            print_forwarding_table(&topology, name);
        }
        None => println!("{} No node near ({x}, {y})", "✗".red()),
    }
    Ok(())
}

pub fn edge(file: &str, x: f64, y: f64) -> Result<()> {
    let config = Config::load()?;
    let topology = open(file, &config)?;

    match topology.find_nearest_edge(x, y, config.spatial.edge_threshold) {
        Some(hit) => println!(
            "{} {} - {} (weight {}, distance {:.4})",
            "✓".green().bold(),
            hit.edge.src.cyan(),
            hit.edge.dest.cyan(),
            hit.edge.weight,
            hit.distance
        ),
        None => println!("{} No edge near ({x}, {y})", "✗".red()),
    }
    Ok(())
}
