//! Forwarding tables: single-source shortest paths with next-hop tracking.
//!
//! A Dijkstra pass from the source records, for every node it reaches, the
//! neighbor of the source that starts the shortest path. Because nodes are
//! finalized in non-decreasing distance order, a node's next hop is already
//! fixed by the time any neighbor is relaxed from it, so neighbors simply
//! inherit it.

use crate::topology::Topology;
use netsim_core::types::{ForwardingTable, NodeName};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry. Ordered so `BinaryHeap` pops the cheapest first.
#[derive(Debug, PartialEq, Eq)]
struct State<'a> {
    cost: u64,
    node: &'a str,
}

impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Everything one search from a source produces.
#[derive(Debug, Default)]
struct Search<'a> {
    dist: HashMap<&'a str, u64>,
    next_hop: HashMap<&'a str, &'a str>,
}

impl Topology {
    /// Destination → next hop for every node reachable from `source`.
    ///
    /// The source itself and unreachable nodes are absent. An unknown source
    /// yields an empty table.
    pub fn forwarding_table(&self, source: &str) -> ForwardingTable {
        let Some(search) = self.search(source) else {
            return ForwardingTable::new();
        };
        search
            .next_hop
            .into_iter()
            .filter(|(dest, _)| *dest != source)
            .map(|(dest, hop)| (dest.to_string(), hop.to_string()))
            .collect()
    }

    /// Shortest path cost from `source` to every reachable node, including
    /// the source at cost 0. Empty for an unknown source.
    pub fn shortest_distances(&self, source: &str) -> HashMap<NodeName, u64> {
        self.search(source)
            .map(|s| {
                s.dist
                    .into_iter()
                    .map(|(n, d)| (n.to_string(), d))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn search<'a>(&'a self, source: &str) -> Option<Search<'a>> {
        let source = self.node_key(source)?;

        let mut search = Search::default();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut heap = BinaryHeap::new();

        search.dist.insert(source, 0);
        heap.push(State { cost: 0, node: source });

        while let Some(State { cost, node }) = heap.pop() {
            if !visited.insert(node) {
                // Stale entry for an already-finalized node.
                continue;
            }

            for (neighbor, weight) in self.neighbors(node) {
                if visited.contains(neighbor) {
                    continue;
                }
                let next_cost = cost + u64::from(weight);
                let improves = search
                    .dist
                    .get(neighbor)
                    .map_or(true, |&current| next_cost < current);

                if improves {
                    search.dist.insert(neighbor, next_cost);
                    let hop = if node == source {
                        neighbor
                    } else {
                        search.next_hop[node]
                    };
                    search.next_hop.insert(neighbor, hop);
                    heap.push(State { cost: next_cost, node: neighbor });
                }
            }
        }

        tracing::trace!(source, reached = search.dist.len(), "forwarding search finished");
        Some(search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsim_core::types::Position;

    fn table(pairs: &[(&str, &str)]) -> ForwardingTable {
        pairs
            .iter()
            .map(|(d, h)| (d.to_string(), h.to_string()))
            .collect()
    }

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
    fn chain_routes_through_middle() {
        let topo = chain();
        assert_eq!(topo.forwarding_table("A"), table(&[("B", "B"), ("C", "B")]));
        assert_eq!(topo.forwarding_table("B"), table(&[("A", "A"), ("C", "C")]));
    }

    #[test]
    fn unknown_source_gives_empty_table() {
        let topo = chain();
        assert!(topo.forwarding_table("Z").is_empty());
        assert!(topo.shortest_distances("Z").is_empty());
        assert!(Topology::new().forwarding_table("A").is_empty());
    }

    #[test]
    fn deleting_middle_node_disconnects_chain() {
        let mut topo = chain();
        topo.delete_node("B");
        assert!(topo.forwarding_table("A").is_empty());
    }

    #[test]
    fn prefers_cheaper_detour_over_direct_edge() {
        // A-D direct costs 10, A-B-C-D costs 3.
        let mut topo = Topology::new();
        topo.add_edge("A", "D", 10).unwrap();
        topo.add_edge("A", "B", 1).unwrap();
        topo.add_edge("B", "C", 1).unwrap();
        topo.add_edge("C", "D", 1).unwrap();

        let fwd = topo.forwarding_table("A");
        assert_eq!(fwd["D"], "B");
        assert_eq!(topo.shortest_distances("A")["D"], 3);
    }

    #[test]
    fn next_hop_is_inherited_along_the_path() {
        // Two branches out of S; everything behind X must route via X.
        let mut topo = Topology::new();
        topo.add_edge("S", "X", 2).unwrap();
        topo.add_edge("S", "Y", 5).unwrap();
        topo.add_edge("X", "X1", 1).unwrap();
        topo.add_edge("X1", "X2", 1).unwrap();
        topo.add_edge("Y", "Y1", 1).unwrap();

        let fwd = topo.forwarding_table("S");
        assert_eq!(fwd["X1"], "X");
        assert_eq!(fwd["X2"], "X");
        assert_eq!(fwd["Y1"], "Y");
        assert!(!fwd.contains_key("S"));
    }

    #[test]
    fn unreachable_nodes_are_absent() {
        let mut topo = chain();
        topo.add_edge("P", "Q", 1).unwrap();
        topo.add_node("island", Position::new(5.0, 5.0));

        let fwd = topo.forwarding_table("A");
        assert_eq!(fwd.len(), 2);
        assert!(!fwd.contains_key("P"));
        assert!(!fwd.contains_key("island"));
    }

    #[test]
    fn isolated_source_has_empty_table() {
        let mut topo = Topology::new();
        topo.add_node("solo", Position::new(0.0, 0.0));
        assert!(topo.forwarding_table("solo").is_empty());
        assert_eq!(topo.shortest_distances("solo")["solo"], 0);
    }

    #[test]
    fn frontier_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(State { cost: 5, node: "a" });
        heap.push(State { cost: 1, node: "b" });
        heap.push(State { cost: 3, node: "c" });
        assert_eq!(heap.pop().map(|s| s.cost), Some(1));
        assert_eq!(heap.pop().map(|s| s.cost), Some(3));
    }
}
