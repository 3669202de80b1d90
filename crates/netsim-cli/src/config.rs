//! Configuration management for the netsim CLI.

use anyhow::{Context, Result};
use netsim::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "netsim.toml";

/// Netsim project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub spatial: SpatialConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub edges: EdgeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialConfig {
    #[serde(default = "default_node_threshold_sq")]
    pub node_threshold_sq: f64,
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,
}

// Default value functions
fn default_node_threshold_sq() -> f64 { NODE_PICK_THRESHOLD_SQ }
fn default_edge_threshold() -> f64 { EDGE_PICK_THRESHOLD }
fn default_iterations() -> usize { 50 }
fn default_seed() -> u64 { 42 }
fn default_scale() -> f64 { 1.0 }
fn default_max_weight() -> u32 { 100 }

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            node_threshold_sq: default_node_threshold_sq(),
            edge_threshold: default_edge_threshold(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            seed: default_seed(),
            scale: default_scale(),
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            max_weight: default_max_weight(),
        }
    }
}

impl LayoutConfig {
    pub fn provider(&self) -> SpringLayout {
        SpringLayout::new(self.iterations, self.seed, self.scale)
    }
}

impl Config {
    /// Load config from netsim.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find netsim.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
