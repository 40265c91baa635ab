//! Shared helpers for the integration suites.
//!
//! Provides a sequential Prim MST builder over 2-D points, an Adjusted Rand
//! Index scorer for comparing partitions against ground truth, and a
//! first-seen relabelling normaliser for partition equality checks.

use std::collections::HashMap;

/// An MST materialised from points, ready for `Mst::new`.
pub struct BuiltMst {
    pub node_count: usize,
    pub weights: Vec<f64>,
    pub endpoints: Vec<(usize, usize)>,
}

fn distance(left: (f64, f64), right: (f64, f64)) -> f64 {
    let dx = left.0 - right.0;
    let dy = left.1 - right.1;
    (dx * dx + dy * dy).sqrt()
}

fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Computes the Euclidean MST of 2-D points with Prim's algorithm.
///
/// Edges come out sorted by weight, ties broken by canonical endpoint order,
/// so the result satisfies the engine's sortedness contract and is
/// deterministic for a fixed point list.
#[must_use]
pub fn euclidean_mst(points: &[(f64, f64)]) -> BuiltMst {
    let node_count = points.len();
    let mut in_tree = vec![false; node_count];
    let mut best_distance = vec![f64::INFINITY; node_count];
    let mut best_source = vec![0_usize; node_count];
    let mut edges: Vec<(f64, usize, usize)> = Vec::with_capacity(node_count.saturating_sub(1));

    if node_count > 0 {
        in_tree[0] = true;
        for vertex in 1..node_count {
            best_distance[vertex] = distance(points[0], points[vertex]);
        }
        for _ in 1..node_count {
            let next = (0..node_count)
                .filter(|&vertex| !in_tree[vertex])
                .min_by(|&a, &b| best_distance[a].total_cmp(&best_distance[b]))
                .expect("a vertex remains outside the tree");
            in_tree[next] = true;
            let (lo, hi) = canonical(best_source[next], next);
            edges.push((best_distance[next], lo, hi));
            for vertex in 0..node_count {
                if !in_tree[vertex] {
                    let candidate = distance(points[next], points[vertex]);
                    if candidate < best_distance[vertex] {
                        best_distance[vertex] = candidate;
                        best_source[vertex] = next;
                    }
                }
            }
        }
    }

    edges.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    BuiltMst {
        node_count,
        weights: edges.iter().map(|edge| edge.0).collect(),
        endpoints: edges.iter().map(|edge| (edge.1, edge.2)).collect(),
    }
}

fn comb2(value: usize) -> f64 {
    let as_float = value as f64;
    as_float * (as_float - 1.0) / 2.0
}

/// Computes the Adjusted Rand Index of two labellings in `[-1, 1]`.
#[must_use]
pub fn adjusted_rand_index(ground_truth: &[i64], predicted: &[i64]) -> f64 {
    assert_eq!(ground_truth.len(), predicted.len(), "label length mismatch");
    let item_count = ground_truth.len();
    if item_count < 2 {
        return 1.0;
    }

    let mut left_counts = HashMap::<i64, usize>::new();
    let mut right_counts = HashMap::<i64, usize>::new();
    let mut contingency = HashMap::<(i64, i64), usize>::new();
    for (&left, &right) in ground_truth.iter().zip(predicted) {
        *left_counts.entry(left).or_insert(0) += 1;
        *right_counts.entry(right).or_insert(0) += 1;
        *contingency.entry((left, right)).or_insert(0) += 1;
    }

    let sum_pair_counts: f64 = contingency.values().copied().map(comb2).sum();
    let sum_left_clusters: f64 = left_counts.values().copied().map(comb2).sum();
    let sum_right_clusters: f64 = right_counts.values().copied().map(comb2).sum();
    let total = comb2(item_count);

    let expected = (sum_left_clusters * sum_right_clusters) / total;
    let max_index = 0.5 * (sum_left_clusters + sum_right_clusters);
    let denominator = max_index - expected;
    if denominator == 0.0 {
        1.0
    } else {
        (sum_pair_counts - expected) / denominator
    }
}

/// Relabels a label vector into first-seen order, leaving noise labels in
/// place. Two label vectors describe the same partition exactly when their
/// first-seen forms are equal.
#[must_use]
pub fn first_seen_form(labels: &[i64]) -> Vec<i64> {
    let mut mapping = HashMap::<i64, i64>::new();
    let mut next = 0_i64;
    labels
        .iter()
        .map(|&label| {
            if label < 0 {
                return label;
            }
            *mapping.entry(label).or_insert_with(|| {
                let id = next;
                next += 1;
                id
            })
        })
        .collect()
}
