//! Synthetic MST fixtures for benchmarking the clustering core.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// An owned spanning tree satisfying the engine's input contract.
pub struct SyntheticMst {
    /// Number of vertices.
    pub node_count: usize,
    /// Edge weights, sorted non-decreasingly.
    pub weights: Vec<f64>,
    /// Unordered endpoint pair per edge, aligned with `weights`.
    pub endpoints: Vec<(usize, usize)>,
}

/// Generates a random attachment tree with a mixed weight profile.
///
/// Every vertex after the first attaches to a uniformly random earlier
/// vertex. Most weights are small and tightly packed; a 5% tail is drawn an
/// order of magnitude higher so that threshold-driven corrections fire. The
/// edge list is sorted by weight before it is returned, as the engine
/// requires.
#[must_use]
pub fn random_tree(node_count: usize, seed: u64) -> SyntheticMst {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges: Vec<(f64, usize, usize)> = Vec::with_capacity(node_count.saturating_sub(1));
    for vertex in 1..node_count {
        let anchor = rng.gen_range(0..vertex);
        let weight = if rng.gen_bool(0.05) {
            rng.gen_range(10.0..20.0)
        } else {
            rng.gen_range(0.5..1.5)
        };
        edges.push((weight, anchor, vertex));
    }
    edges.sort_by(|a, b| a.0.total_cmp(&b.0));

    SyntheticMst {
        node_count,
        weights: edges.iter().map(|edge| edge.0).collect(),
        endpoints: edges.iter().map(|edge| (edge.1, edge.2)).collect(),
    }
}
