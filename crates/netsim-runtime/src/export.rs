//! JSON snapshot of a topology, including node positions.
//!
//! The text format drops coordinates; the snapshot keeps them so a drawing
//! front end can restore exactly what was on screen.

use crate::topology::Topology;
use netsim_core::error::Result;
use netsim_core::types::{EdgeRecord, NodeName};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable view of a topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<EdgeRecord>,
    pub metadata: SnapshotMetadata,
}

/// Serializable node. Unplaced nodes have no coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub name: NodeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub node_count: usize,
    pub edge_count: usize,
    pub components: usize,
    pub total_weight: u64,
}

impl Snapshot {
    /// Capture nodes in insertion order and edges in record order.
    pub fn capture(topology: &Topology) -> Self {
        let nodes = topology
            .nodes()
            .iter()
            .map(|name| {
                let pos = topology.position(name);
                SnapshotNode {
                    name: name.clone(),
                    x: pos.map(|p| p.x),
                    y: pos.map(|p| p.y),
                }
            })
            .collect();

        Self {
            nodes,
            edges: topology.edge_records().to_vec(),
            metadata: SnapshotMetadata {
                node_count: topology.node_count(),
                edge_count: topology.edge_count(),
                components: topology.connected_components(),
                total_weight: topology.total_weight(),
            },
        }
    }

    /// Rebuild a topology, positions included.
    pub fn restore(&self) -> Result<Topology> {
        let mut topology = Topology::new();
        for node in &self.nodes {
            match (node.x, node.y) {
                (Some(x), Some(y)) => topology.add_node(&node.name, (x, y).into()),
                _ => topology.ensure_node(&node.name),
            }
        }
        for edge in &self.edges {
            topology.add_edge(&edge.src, &edge.dest, edge.weight)?;
        }
        Ok(topology)
    }
}

/// Write a pretty-printed JSON snapshot of `topology` to `path`.
pub fn export_json(topology: &Topology, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(&Snapshot::capture(topology))?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Read a snapshot written by [`export_json`].
pub fn import_json(path: &Path) -> Result<Topology> {
    let content = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    snapshot.restore()
}
