//! Topology file format.
//!
//! ```text
//! <node_count>,<edge_count>
//! <src>,<dest>,<weight>      (edge_count lines)
//! ```
//!
//! The node count is advisory: the node set is whatever the edge lines
//! mention. Lines past the declared edge count are ignored. Nodes get their
//! positions from a [`LayoutProvider`] once all edges are in.

use crate::topology::Topology;
use netsim_core::error::{NetsimError, Result};
use netsim_core::layout::LayoutProvider;
use netsim_core::types::{EdgeRecord, Weight};
use std::path::Path;

/// Parsed header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Parse topology text into its header and edge records, in file order.
pub fn decode(text: &str) -> Result<(Header, Vec<EdgeRecord>)> {
    let mut lines = body_lines(text);
    let header = parse_header(lines.next().unwrap_or_default())?;

    // The declared count is untrusted, so it never sizes an allocation.
    let mut edges = Vec::new();
    for index in 0..header.edge_count {
        edges.push(next_edge(&mut lines, &header, index)?);
    }

    Ok((header, edges))
}

/// Render the topology: header with current counts, then every edge record
/// in insertion order.
pub fn encode(topology: &Topology) -> String {
    let mut out = format!("{},{}\n", topology.node_count(), topology.edge_count());
    for edge in topology.edge_records() {
        out.push_str(&format!("{},{},{}\n", edge.src, edge.dest, edge.weight));
    }
    out
}

/// Replace `topology` with the one described by `text`.
///
/// The topology is cleared once up front and each edge is added as soon as
/// its line parses. On a format error the edges from earlier lines stay in
/// place and no layout is applied.
pub fn load_str(topology: &mut Topology, text: &str, layout: &dyn LayoutProvider) -> Result<()> {
    topology.clear();
    let mut lines = body_lines(text);
    let header = parse_header(lines.next().unwrap_or_default())?;

    for index in 0..header.edge_count {
        let edge = next_edge(&mut lines, &header, index)?;
        topology.add_edge(&edge.src, &edge.dest, edge.weight)?;
    }
    if header.node_count != topology.node_count() {
        tracing::debug!(
            declared = header.node_count,
            actual = topology.node_count(),
            "node count in header differs from nodes referenced by edges"
        );
    }
    if !topology.is_empty() {
        topology.apply_layout(layout);
    }

    tracing::debug!(
        nodes = topology.node_count(),
        edges = topology.edge_count(),
        "loaded topology"
    );
    Ok(())
}

/// Replace `topology` with the contents of the file at `path`.
///
/// The topology is cleared even when the file cannot be read.
pub fn load(topology: &mut Topology, path: &Path, layout: &dyn LayoutProvider) -> Result<()> {
    topology.clear();
    let text = std::fs::read_to_string(path)?;
    load_str(topology, &text, layout)
}

/// Write `topology` to `path`, replacing any existing file.
pub fn save(topology: &Topology, path: &Path) -> Result<()> {
    std::fs::write(path, encode(topology))?;
    tracing::debug!(
        path = %path.display(),
        edges = topology.edge_count(),
        "saved topology"
    );
    Ok(())
}

fn body_lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split('\n').map(str::trim)
}

/// Parse the edge line at `index` (0-based, after the header).
fn next_edge<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    header: &Header,
    index: usize,
) -> Result<EdgeRecord> {
    let line_no = index + 2;
    let line = lines.next().ok_or_else(|| {
        NetsimError::format(
            line_no,
            format!("expected {} edge lines, found {}", header.edge_count, index),
        )
    })?;
    parse_edge(line, line_no)
}

fn parse_header(line: &str) -> Result<Header> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [nodes, edges] = fields.as_slice() else {
        return Err(NetsimError::format(
            1,
            format!("expected '<node_count>,<edge_count>', found '{line}'"),
        ));
    };
    let count = |field: &str, what: &str| {
        field.parse::<usize>().map_err(|_| {
            NetsimError::format(1, format!("{what} '{field}' is not a non-negative integer"))
        })
    };
    Ok(Header {
        node_count: count(*nodes, "node count")?,
        edge_count: count(*edges, "edge count")?,
    })
}

fn parse_edge(line: &str, line_no: usize) -> Result<EdgeRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [src, dest, weight] = fields.as_slice() else {
        return Err(NetsimError::format(
            line_no,
            format!("expected '<src>,<dest>,<weight>', found '{line}'"),
        ));
    };
    if src.is_empty() || dest.is_empty() {
        return Err(NetsimError::format(line_no, "empty node name"));
    }
    if src == dest {
        return Err(NetsimError::format(line_no, format!("self-loop on '{src}'")));
    }
    let weight: i64 = weight
        .parse()
        .map_err(|_| NetsimError::format(line_no, format!("weight '{weight}' is not an integer")))?;
    let weight = Weight::try_from(weight)
        .ok()
        .filter(|w| *w >= 1)
        .ok_or_else(|| NetsimError::format(line_no, format!("weight {weight} must be >= 1")))?;

    Ok(EdgeRecord::new(*src, *dest, weight))
}
