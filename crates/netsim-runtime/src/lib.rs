//! # Netsim Runtime
//!
//! The routing topology and everything computed from it.
//!
//! - [`topology`] owns nodes, edges, weights and positions; every mutation
//!   goes through it
//! - [`spatial`] resolves a coordinate to the nearest node or edge
//! - [`forwarding`] runs single-source shortest paths and derives each
//!   destination's next hop
//! - [`codec`] reads and writes the line-oriented topology file format
//! - [`spring_layout`] places nodes after a load
//! - [`export`] writes a JSON snapshot including positions

pub mod topology;
pub mod spatial;
pub mod forwarding;
pub mod codec;
pub mod spring_layout;
pub mod export;
