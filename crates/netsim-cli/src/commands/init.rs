//! Write a default netsim.toml.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let dir = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let target = dir.join(CONFIG_FILE);
    if target.exists() {
        bail!("{} already exists", target.display().to_string().cyan());
    }

    std::fs::create_dir_all(&dir)?;
    Config::default().save(&target)?;

    println!("{} Created {}", "✓".green().bold(), target.display().to_string().cyan());
    Ok(())
}
