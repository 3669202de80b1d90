//! Force-directed placement for topologies loaded without coordinates.
//!
//! Fruchterman-Reingold: every pair of nodes repels with `k²/d`, every edge
//! attracts its endpoints with `w·d²/k`, and a linearly cooling temperature
//! caps how far a node moves per iteration. The result is centred on the
//! origin and scaled so the farthest coordinate sits at `scale`.

use netsim_core::layout::LayoutProvider;
use netsim_core::types::{EdgeRecord, NodeName, Position};
use std::collections::HashMap;

/// Floor for distances and displacement lengths, avoids division by zero.
const MIN_DISTANCE: f64 = 0.01;
const INITIAL_TEMPERATURE: f64 = 0.1;

/// Seeded spring layout. The same seed and topology always give the same
/// positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringLayout {
    pub iterations: usize,
    pub seed: u64,
    pub scale: f64,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 42,
            scale: 1.0,
        }
    }
}

impl SpringLayout {
    pub fn new(iterations: usize, seed: u64, scale: f64) -> Self {
        Self {
            iterations,
            seed,
            scale,
        }
    }
}

/// 64-bit LCG; plenty for initial scatter.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl LayoutProvider for SpringLayout {
    fn layout(&self, nodes: &[NodeName], edges: &[EdgeRecord]) -> HashMap<NodeName, Position> {
        let n = nodes.len();
        if n == 0 {
            return HashMap::new();
        }
        if n == 1 {
            return HashMap::from([(nodes[0].clone(), Position::new(0.0, 0.0))]);
        }

        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        let springs: Vec<(usize, usize, f64)> = edges
            .iter()
            .filter_map(|e| {
                Some((
                    *index.get(e.src.as_str())?,
                    *index.get(e.dest.as_str())?,
                    f64::from(e.weight),
                ))
            })
            .collect();

        let mut rng = Lcg(self.seed);
        let mut pos: Vec<(f64, f64)> = (0..n).map(|_| (rng.next_f64(), rng.next_f64())).collect();

        let k = 1.0 / (n as f64).sqrt();
        let mut temperature = INITIAL_TEMPERATURE;
        let cooling = INITIAL_TEMPERATURE / (self.iterations as f64 + 1.0);

        for _ in 0..self.iterations {
            let mut disp = vec![(0.0f64, 0.0f64); n];

            for i in 0..n {
                for j in (i + 1)..n {
                    let (dx, dy) = (pos[i].0 - pos[j].0, pos[i].1 - pos[j].1);
                    let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                    let force = k * k / d;
                    let (fx, fy) = (dx / d * force, dy / d * force);
                    disp[i].0 += fx;
                    disp[i].1 += fy;
                    disp[j].0 -= fx;
                    disp[j].1 -= fy;
                }
            }

            for &(a, b, w) in &springs {
                let (dx, dy) = (pos[a].0 - pos[b].0, pos[a].1 - pos[b].1);
                let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = w * d * d / k;
                let (fx, fy) = (dx / d * force, dy / d * force);
                disp[a].0 -= fx;
                disp[a].1 -= fy;
                disp[b].0 += fx;
                disp[b].1 += fy;
            }

            for (p, (dx, dy)) in pos.iter_mut().zip(&disp) {
                let len = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let step = len.min(temperature);
                p.0 += dx / len * step;
                p.1 += dy / len * step;
            }
            temperature -= cooling;
        }

        rescale(&mut pos, self.scale);
        tracing::trace!(nodes = n, springs = springs.len(), "spring layout finished");

        nodes
            .iter()
            .zip(pos)
            .map(|(name, (x, y))| (name.clone(), Position::new(x, y)))
            .collect()
    }
}

/// Centre on the origin and stretch so the largest |coordinate| is `scale`.
fn rescale(pos: &mut [(f64, f64)], scale: f64) {
    let n = pos.len() as f64;
    let (mx, my) = pos
        .iter()
        .fold((0.0f64, 0.0f64), |(sx, sy), (x, y)| (sx + x, sy + y));
    let (mx, my) = (mx / n, my / n);

    let mut lim: f64 = 0.0;
    for p in pos.iter_mut() {
        p.0 -= mx;
        p.1 -= my;
        lim = lim.max(p.0.abs()).max(p.1.abs());
    }
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p.0 *= scale / lim;
            p.1 *= scale / lim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<NodeName> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_and_single_node() {
        let layout = SpringLayout::default();
        assert!(layout.layout(&[], &[]).is_empty());

        let one = layout.layout(&names(&["A"]), &[]);
        assert_eq!(one["A"], Position::new(0.0, 0.0));
    }

    #[test]
    fn places_every_node_within_scale() {
        let nodes = names(&["A", "B", "C", "D"]);
        let edges = vec![
            EdgeRecord::new("A", "B", 1),
            EdgeRecord::new("B", "C", 2),
            EdgeRecord::new("C", "D", 1),
        ];
        let placed = SpringLayout::new(50, 7, 2.0).layout(&nodes, &edges);

        assert_eq!(placed.len(), 4);
        for pos in placed.values() {
            assert!(pos.x.is_finite() && pos.y.is_finite());
            assert!(pos.x.abs() <= 2.0 + 1e-9 && pos.y.abs() <= 2.0 + 1e-9);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![EdgeRecord::new("A", "B", 1), EdgeRecord::new("B", "C", 1)];
        let layout = SpringLayout::default();
        assert_eq!(layout.layout(&nodes, &edges), layout.layout(&nodes, &edges));
    }

    #[test]
    fn nodes_are_spread_apart() {
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![EdgeRecord::new("A", "B", 1), EdgeRecord::new("B", "C", 1)];
        let placed = SpringLayout::default().layout(&nodes, &edges);

        assert!(placed["A"].distance_to(&placed["C"]) > 0.1);
        assert!(placed["A"].distance_to(&placed["B"]) > 0.1);
    }
}
