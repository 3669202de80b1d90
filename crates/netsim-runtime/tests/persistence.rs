//! File-backed load/save behaviour.

use netsim_core::error::NetsimError;
use netsim_core::types::Position;
use netsim_runtime::codec;
use netsim_runtime::spring_layout::SpringLayout;
use netsim_runtime::topology::Topology;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn canonical_edges(topo: &Topology) -> Vec<(String, String, u32)> {
    let mut edges: Vec<_> = topo
        .edge_records()
        .iter()
        .map(|e| {
            let (a, b, w) = e.canonical();
            (a.to_string(), b.to_string(), w)
        })
        .collect();
    edges.sort();
    edges
}

fn node_set(topo: &Topology) -> BTreeSet<String> {
    topo.nodes().iter().cloned().collect()
}

#[test]
fn load_file_lays_out_every_node() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("net.txt");
    std::fs::write(&path, "3,2\nA,B,1\nB,C,1\n").unwrap();

    let mut topo = Topology::new();
    codec::load(&mut topo, &path, &SpringLayout::default()).unwrap();

    assert_eq!(topo.node_count(), 3);
    for name in ["A", "B", "C"] {
        assert!(topo.position(name).is_some(), "{name} has no position");
    }
    assert_eq!(topo.forwarding_table("A")["C"], "B");
}

#[test]
fn save_writes_exact_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut topo = Topology::new();
    topo.add_node("A", Position::new(0.0, 0.0));
    topo.add_node("B", Position::new(1.0, 0.0));
    topo.add_edge("A", "B", 5).unwrap();
    codec::save(&topo, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "2,1\nA,B,5\n");
}

#[test]
fn save_to_unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be written as a file.
    let err = codec::save(&Topology::new(), dir.path()).unwrap_err();
    assert!(matches!(err, NetsimError::Io(_)));
}

#[test]
fn missing_file_is_io_error_and_clears() {
    let dir = tempfile::tempdir().unwrap();
    let mut topo = Topology::new();
    topo.add_edge("A", "B", 1).unwrap();

    let err = codec::load(&mut topo, &dir.path().join("nope.txt"), &SpringLayout::default())
        .unwrap_err();
    assert!(matches!(err, NetsimError::Io(_)));
    assert!(topo.is_empty());
}

#[test]
fn deleting_then_saving_drops_records() {
    let mut topo = Topology::new();
    codec::load_str(
        &mut topo,
        "3,2\nA,B,1\nB,C,1\n",
        &SpringLayout::default(),
    )
    .unwrap();
    topo.delete_node("B");

    assert_eq!(codec::encode(&topo), "2,0\n");
    assert!(topo.forwarding_table("A").is_empty());
}

proptest! {
    #[test]
    fn save_then_load_preserves_edges_and_nodes(
        raw in prop::collection::vec((0usize..8, 0usize..8, 1u32..100), 1..20),
    ) {
        let mut topo = Topology::new();
        for (u, v, w) in raw {
            if u != v {
                topo.add_edge(&format!("r{u}"), &format!("r{v}"), w).unwrap();
            }
        }

        let text = codec::encode(&topo);
        let mut back = Topology::new();
        codec::load_str(&mut back, &text, &SpringLayout::default()).unwrap();

        prop_assert_eq!(canonical_edges(&back), canonical_edges(&topo));
        prop_assert_eq!(node_set(&back), node_set(&topo));
        prop_assert_eq!(codec::encode(&back), text);
    }
}
