//! Load, mutate and save a topology file.

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::commands::{open, store};
use crate::config::Config;

pub fn add_edge(file: &str, from: &str, to: &str, weight: u32) -> Result<()> {
    let config = Config::load()?;
    if weight > config.edges.max_weight {
        bail!(
            "Weight {} exceeds the configured maximum of {}",
            weight,
            config.edges.max_weight
        );
    }

    let mut topology = open(file, &config)?;
    let existed = topology.weight(from, to).is_some();
    topology
        .add_edge(from, to, weight)
        .with_context(|| format!("Cannot add edge {from} - {to}"))?;
    store(&topology, file)?;

    let verb = if existed { "Updated" } else { "Added" };
    println!(
        "{} {} edge {} - {} (weight {})",
        "✓".green().bold(),
        verb,
        from.cyan(),
        to.cyan(),
        weight
    );
    Ok(())
}

pub fn delete_node(file: &str, name: &str) -> Result<()> {
    let config = Config::load()?;
    let mut topology = open(file, &config)?;

    if !topology.contains_node(name) {
        println!("{} Node {} not present, nothing to do", "→".blue(), name.cyan());
        return Ok(());
    }
    let edges_before = topology.edge_count();
    topology.delete_node(name);
    store(&topology, file)?;

    println!(
        "{} Deleted node {} and {} edge(s)",
        "✓".green().bold(),
        name.cyan(),
        edges_before - topology.edge_count()
    );
    Ok(())
}

pub fn delete_edge(file: &str, from: &str, to: &str) -> Result<()> {
    let config = Config::load()?;
    let mut topology = open(file, &config)?;

    if topology.weight(from, to).is_none() {
        println!("{} No edge {} - {}, nothing to do", "→".blue(), from.cyan(), to.cyan());
        return Ok(());
    }
    topology.delete_edge(from, to);
    store(&topology, file)?;

    println!("{} Deleted edge {} - {}", "✓".green().bold(), from.cyan(), to.cyan());
    Ok(())
}
