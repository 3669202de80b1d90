//! # Netsim
//!
//! A network routing topology: named routers joined by weighted,
//! undirected links, with per-router forwarding tables computed by
//! shortest-path search.
//!
//! ## Quick Start
//!
//! ```rust
//! use netsim::prelude::*;
//!
//! let mut topo = Topology::new();
//! topo.add_node("A", Position::new(0.0, 0.0));
//! topo.add_node("B", Position::new(1.0, 0.0));
//! topo.add_node("C", Position::new(2.0, 0.0));
//! topo.add_edge("A", "B", 1).unwrap();
//! topo.add_edge("B", "C", 1).unwrap();
//!
//! let table = topo.forwarding_table("A");
//! assert_eq!(table["C"], "B");
//!
//! // Pick the router drawn at (1.05, 0.0).
//! assert_eq!(topo.find_nearest_node(1.05, 0.0), Some("B"));
//! ```
//!
//! ## Persistence
//!
//! ```rust,ignore
//! use netsim::prelude::*;
//! use std::path::Path;
//!
//! let mut topo = Topology::new();
//! load(&mut topo, Path::new("network.txt"), &SpringLayout::default())?;
//! save(&topo, Path::new("copy.txt"))?;
//! ```
//!
//! ## Architecture
//!
//! - [`netsim_core`] - Shared types, errors, the layout seam
//! - [`netsim_runtime`] - Topology store, spatial queries, forwarding, codec

pub use netsim_core as core;
pub use netsim_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use netsim::prelude::*;
/// ```
pub mod prelude {
    pub use netsim_core::prelude::*;

    pub use netsim_runtime::codec::{decode, encode, load, load_str, save, Header};
    pub use netsim_runtime::export::{export_json, import_json, Snapshot};
    pub use netsim_runtime::spatial::{
        point_segment_distance, NearestEdge, EDGE_PICK_THRESHOLD, NODE_PICK_THRESHOLD_SQ,
    };
    pub use netsim_runtime::spring_layout::SpringLayout;
    pub use netsim_runtime::topology::{SharedTopology, Topology};
}
