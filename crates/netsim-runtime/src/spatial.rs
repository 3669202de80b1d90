//! Spatial queries: resolve a point in the drawing plane to a node or edge.
//!
//! Both queries scan linearly in insertion order, so the first of several
//! equally near candidates wins. Nodes without a position are skipped, as
//! are edges with an unplaced endpoint.

use crate::topology::Topology;
use netsim_core::types::{EdgeRecord, Position};

/// Squared distance under which a point selects a node (distance < 0.1).
pub const NODE_PICK_THRESHOLD_SQ: f64 = 0.01;

/// Distance under which a point selects an edge.
pub const EDGE_PICK_THRESHOLD: f64 = 1.0;

/// An edge matched by [`Topology::find_nearest_edge`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestEdge<'a> {
    pub edge: &'a EdgeRecord,
    pub distance: f64,
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection of `p` onto the line is clamped to the segment. A
/// degenerate segment reduces to point-to-point distance.
pub fn point_segment_distance(p: Position, a: Position, b: Position) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Position::new(a.x + t * dx, a.y + t * dy))
}

impl Topology {
    /// Node nearest to (`x`, `y`) within [`NODE_PICK_THRESHOLD_SQ`].
    pub fn find_nearest_node(&self, x: f64, y: f64) -> Option<&str> {
        self.find_nearest_node_within(x, y, NODE_PICK_THRESHOLD_SQ)
    }

    /// Node whose squared distance to (`x`, `y`) is smallest and strictly
    /// below `threshold_sq`.
    pub fn find_nearest_node_within(&self, x: f64, y: f64, threshold_sq: f64) -> Option<&str> {
        let target = Position::new(x, y);
        let mut best: Option<(&str, f64)> = None;

        for name in self.nodes() {
            let Some(pos) = self.position(name) else {
                continue;
            };
            let dist = pos.distance_sq(&target);
            if dist < threshold_sq && best.map_or(true, |(_, d)| dist < d) {
                best = Some((name.as_str(), dist));
            }
        }

        best.map(|(name, _)| name)
    }

    /// Edge whose segment is nearest to (`x`, `y`) and strictly closer than
    /// `threshold`. Pass [`EDGE_PICK_THRESHOLD`] for the usual pick radius.
    pub fn find_nearest_edge(&self, x: f64, y: f64, threshold: f64) -> Option<NearestEdge<'_>> {
        let target = Position::new(x, y);
        let mut best: Option<NearestEdge<'_>> = None;

        for edge in self.edge_records() {
            let (Some(a), Some(b)) = (self.position(&edge.src), self.position(&edge.dest)) else {
                continue;
            };
            let distance = point_segment_distance(target, a, b);
            if distance < threshold && best.map_or(true, |m| distance < m.distance) {
                best = Some(NearestEdge { edge, distance });
            }
        }

        best
    }
}
