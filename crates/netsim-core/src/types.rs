//! Shared types used across all netsim crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nodes are identified by their unique name.
pub type NodeName = String;

/// Path cost of an edge. Always at least 1 once stored in a topology.
pub type Weight = u32;

/// Destination → next hop, as produced for a single source node.
///
/// Keyed by destination so iteration is deterministic.
pub type ForwardingTable = BTreeMap<NodeName, NodeName>;

/// A position in the 2D plane the topology is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance. Cheaper than `distance_to` when only
    /// comparisons are needed.
    pub fn distance_sq(&self, other: &Position) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// One edge as it is persisted: endpoints in the order they were first
/// given, plus the current weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: NodeName,
    pub dest: NodeName,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(src: impl Into<NodeName>, dest: impl Into<NodeName>, weight: Weight) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            weight,
        }
    }

    /// True if this record joins `u` and `v`, in either order.
    pub fn connects(&self, u: &str, v: &str) -> bool {
        (self.src == u && self.dest == v) || (self.src == v && self.dest == u)
    }

    /// True if `node` is one of the endpoints.
    pub fn touches(&self, node: &str) -> bool {
        self.src == node || self.dest == node
    }

    /// Endpoints ordered lexicographically, for order-insensitive comparisons.
    pub fn canonical(&self) -> (&str, &str, Weight) {
        if self.src <= self.dest {
            (&self.src, &self.dest, self.weight)
        } else {
            (&self.dest, &self.src, self.weight)
        }
    }
}
