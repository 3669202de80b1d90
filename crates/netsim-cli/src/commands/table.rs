//! Print a node's forwarding table.

use anyhow::Result;
use colored::Colorize;

use crate::commands::{open, print_forwarding_table};
use crate::config::Config;

pub fn run(file: &str, node: &str) -> Result<()> {
    let config = Config::load()?;
    let topology = open(file, &config)?;

    // An unknown node simply has an empty table.
    if !topology.contains_node(node) {
        println!("{} Node {} is not in {}", "→".blue(), node.cyan(), file);
    }
    print_forwarding_table(&topology, node);
    Ok(())
}
