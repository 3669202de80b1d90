//! Layout — assigning drawing positions to a freshly loaded topology.
//!
//! Persisted topologies carry no coordinates, so after a load every node
//! gets a position from a layout provider. Any 2D placement satisfies the
//! contract; the returned positions are used verbatim.

use crate::types::{EdgeRecord, NodeName, Position};
use std::collections::HashMap;

/// Computes a position for every node of a topology.
///
/// This is a trait rather than a concrete algorithm so callers can swap in
/// deterministic, randomized, or fixed placements.
pub trait LayoutProvider {
    /// Place `nodes` given the edges between them.
    ///
    /// Nodes missing from the returned map keep whatever position they had.
    fn layout(&self, nodes: &[NodeName], edges: &[EdgeRecord]) -> HashMap<NodeName, Position>;
}

impl<F> LayoutProvider for F
where
    F: Fn(&[NodeName], &[EdgeRecord]) -> HashMap<NodeName, Position>,
{
    fn layout(&self, nodes: &[NodeName], edges: &[EdgeRecord]) -> HashMap<NodeName, Position> {
        self(nodes, edges)
    }
}
