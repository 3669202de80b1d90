//! The graph store: a weighted, undirected, simple graph of named nodes.
//!
//! Edges are kept in two views over the same data. The adjacency lists give
//! fast neighbor lookup for path search; the ordered record list preserves
//! insertion order for persistence. Every mutator updates both.

use netsim_core::error::{NetsimError, Result};
use netsim_core::layout::LayoutProvider;
use netsim_core::types::{EdgeRecord, NodeName, Position, Weight};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

/// A topology shared between threads.
///
/// Path search reads the whole adjacency structure, so the lock covers the
/// entire topology rather than individual nodes.
pub type SharedTopology = Arc<Mutex<Topology>>;

#[derive(Debug, Clone, Default)]
struct NodeEntry {
    /// `None` until the node is placed explicitly or by a layout.
    position: Option<Position>,
    neighbors: Vec<(NodeName, Weight)>,
}

/// Owned adjacency-list topology with insertion-ordered nodes and edges.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: HashMap<NodeName, NodeEntry>,
    /// Node names in insertion order.
    order: Vec<NodeName>,
    /// Edges in insertion order, as persisted.
    records: Vec<EdgeRecord>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a topology for use behind a single topology-wide lock.
    pub fn into_shared(self) -> SharedTopology {
        Arc::new(Mutex::new(self))
    }

    /// Insert a node, or move it if the name already exists.
    pub fn add_node(&mut self, name: &str, position: Position) {
        self.entry(name).position = Some(position);
    }

    /// Insert `name` without a position unless it already exists.
    pub fn ensure_node(&mut self, name: &str) {
        self.entry(name);
    }

    /// Insert or reweight the edge between `u` and `v`.
    ///
    /// Missing endpoints are created without a position. Re-adding an
    /// existing edge (in either order) updates its weight in place and keeps
    /// its original slot in the record list.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        if weight == 0 {
            return Err(NetsimError::InvalidWeight(i64::from(weight)));
        }
        if u == v {
            return Err(NetsimError::SelfLoop(u.to_string()));
        }

        Self::set_neighbor(self.entry(u), v, weight);
        Self::set_neighbor(self.entry(v), u, weight);

        if let Some(record) = self.records.iter_mut().find(|r| r.connects(u, v)) {
            record.weight = weight;
        } else {
            self.records.push(EdgeRecord::new(u, v, weight));
        }
        Ok(())
    }

    /// Remove a node and every edge incident to it. No-op if absent.
    pub fn delete_node(&mut self, name: &str) {
        let Some(entry) = self.nodes.remove(name) else {
            return;
        };
        for (neighbor, _) in &entry.neighbors {
            if let Some(other) = self.nodes.get_mut(neighbor) {
                other.neighbors.retain(|(n, _)| n != name);
            }
        }
        self.order.retain(|n| n != name);
        self.records.retain(|r| !r.touches(name));
        tracing::trace!(node = name, removed_edges = entry.neighbors.len(), "deleted node");
    }

    /// Remove the edge between `u` and `v`, in either order. No-op if absent.
    pub fn delete_edge(&mut self, u: &str, v: &str) {
        if let Some(entry) = self.nodes.get_mut(u) {
            entry.neighbors.retain(|(n, _)| n != v);
        }
        if let Some(entry) = self.nodes.get_mut(v) {
            entry.neighbors.retain(|(n, _)| n != u);
        }
        self.records.retain(|r| !r.connects(u, v));
    }

    /// Reset to the empty topology.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
        self.records.clear();
    }

    /// Ask `provider` for positions and store every one it returns.
    pub fn apply_layout(&mut self, provider: &dyn LayoutProvider) {
        let placed = provider.layout(&self.order, &self.records);
        for (name, position) in placed {
            if let Some(entry) = self.nodes.get_mut(&name) {
                entry.position = Some(position);
            }
        }
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// The stored copy of `name`, borrowed for as long as the topology.
    pub(crate) fn node_key(&self, name: &str) -> Option<&str> {
        self.nodes.get_key_value(name).map(|(k, _)| k.as_str())
    }

    /// Position of `name`, if the node exists and has been placed.
    pub fn position(&self, name: &str) -> Option<Position> {
        self.nodes.get(name).and_then(|e| e.position)
    }

    /// Weight of the edge between `u` and `v`, in either order.
    pub fn weight(&self, u: &str, v: &str) -> Option<Weight> {
        self.nodes
            .get(u)?
            .neighbors
            .iter()
            .find(|(n, _)| n == v)
            .map(|(_, w)| *w)
    }

    /// Neighbors of `name` with edge weights. Empty for unknown nodes.
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.nodes
            .get(name)
            .into_iter()
            .flat_map(|e| e.neighbors.iter().map(|(n, w)| (n.as_str(), *w)))
    }

    /// Node names in insertion order.
    pub fn nodes(&self) -> &[NodeName] {
        &self.order
    }

    /// Edge records in insertion order.
    pub fn edge_records(&self) -> &[EdgeRecord] {
        &self.records
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.weight)).sum()
    }

    /// Number of connected components. Isolated nodes count as one each.
    pub fn connected_components(&self) -> usize {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut components = 0;

        for start in &self.order {
            if !visited.insert(start.as_str()) {
                continue;
            }
            components += 1;
            let mut queue = VecDeque::new();
            queue.push_back(start.as_str());
            while let Some(current) = queue.pop_front() {
                for (next, _) in self.neighbors(current) {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        components
    }

    fn entry(&mut self, name: &str) -> &mut NodeEntry {
        if !self.nodes.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.nodes.entry(name.to_string()).or_default()
    }

    fn set_neighbor(entry: &mut NodeEntry, neighbor: &str, weight: Weight) {
        match entry.neighbors.iter_mut().find(|(n, _)| n == neighbor) {
            Some(slot) => slot.1 = weight,
            None => entry.neighbors.push((neighbor.to_string(), weight)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Topology {
        let mut topo = Topology::new();
        topo.add_node("A", Position::new(0.0, 0.0));
        topo.add_node("B", Position::new(1.0, 0.0));
        topo.add_node("C", Position::new(2.0, 0.0));
        topo.add_edge("A", "B", 1).unwrap();
        topo.add_edge("B", "C", 1).unwrap();
        topo
    }

    #[test]
    fn add_node_upserts_position() {
        let mut topo = Topology::new();
        topo.add_node("A", Position::new(0.0, 0.0));
        topo.add_node("A", Position::new(5.0, 5.0));

        assert_eq!(topo.node_count(), 1);
        assert_eq!(topo.position("A"), Some(Position::new(5.0, 5.0)));
    }

    #[test]
    fn add_edge_creates_missing_endpoints_without_position() {
        let mut topo = Topology::new();
        topo.add_edge("X", "Y", 4).unwrap();

        assert!(topo.contains_node("X"));
        assert!(topo.contains_node("Y"));
        assert_eq!(topo.position("X"), None);
        assert_eq!(topo.nodes(), &["X".to_string(), "Y".to_string()]);
    }

    #[test]
    fn add_edge_is_undirected_and_overwrites_weight() {
        let mut topo = chain();
        topo.add_edge("B", "A", 7).unwrap();

        assert_eq!(topo.weight("A", "B"), Some(7));
        assert_eq!(topo.weight("B", "A"), Some(7));
        assert_eq!(topo.edge_count(), 2);
        // The record keeps its original slot and orientation.
        assert_eq!(topo.edge_records()[0], EdgeRecord::new("A", "B", 7));
        assert_eq!(topo.neighbors("A").count(), 1);
    }

    #[test]
    fn add_edge_rejects_zero_weight_and_self_loops() {
        let mut topo = Topology::new();
        assert!(matches!(
            topo.add_edge("A", "B", 0),
            Err(NetsimError::InvalidWeight(0))
        ));
        assert!(matches!(
            topo.add_edge("A", "A", 1),
            Err(NetsimError::SelfLoop(_))
        ));
        assert!(topo.is_empty());
    }

    #[test]
    fn delete_node_cascades_to_edges() {
        let mut topo = chain();
        topo.delete_node("B");

        assert_eq!(topo.node_count(), 2);
        assert_eq!(topo.edge_count(), 0);
        assert_eq!(topo.neighbors("A").count(), 0);
        assert_eq!(topo.neighbors("C").count(), 0);
    }

    #[test]
    fn delete_edge_ignores_argument_order() {
        let mut topo = chain();
        topo.delete_edge("C", "B");

        assert_eq!(topo.weight("B", "C"), None);
        assert_eq!(topo.edge_records(), &[EdgeRecord::new("A", "B", 1)]);
    }

    #[test]
    fn deleting_missing_entities_is_a_noop() {
        let mut topo = chain();
        topo.delete_node("Z");
        topo.delete_edge("A", "C");
        topo.delete_edge("A", "Z");

        assert_eq!(topo.node_count(), 3);
        assert_eq!(topo.edge_count(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut topo = chain();
        topo.clear();

        assert!(topo.is_empty());
        assert_eq!(topo.edge_count(), 0);
        assert!(!topo.contains_node("A"));
    }

    #[test]
    fn apply_layout_sets_returned_positions() {
        let mut topo = Topology::new();
        topo.add_edge("A", "B", 1).unwrap();
        let fixed = |nodes: &[NodeName], _: &[EdgeRecord]| {
            nodes
                .iter()
                .map(|n| (n.clone(), Position::new(1.0, 2.0)))
                .collect::<HashMap<_, _>>()
        };
        topo.apply_layout(&fixed);

        assert_eq!(topo.position("A"), Some(Position::new(1.0, 2.0)));
        assert_eq!(topo.position("B"), Some(Position::new(1.0, 2.0)));
    }

    #[test]
    fn counts_components() {
        let mut topo = chain();
        assert_eq!(topo.connected_components(), 1);

        topo.add_node("lonely", Position::new(9.0, 9.0));
        topo.add_edge("D", "E", 2).unwrap();
        assert_eq!(topo.connected_components(), 3);
        assert_eq!(topo.total_weight(), 4);
    }

    #[test]
    fn shared_topology_locks_whole_graph() {
        let shared = chain().into_shared();
        let handle = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                shared.lock().unwrap().delete_node("C");
            })
        };
        handle.join().unwrap();
        assert_eq!(shared.lock().unwrap().node_count(), 2);
    }
}
