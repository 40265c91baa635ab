//! Information-criterion schedule over the Genie+ engine.
//!
//! Over-merges to `cluster_count + add_clusters` components under a sequence
//! of Gini thresholds, consuming edges under each threshold in turn, then
//! collapses the survivors pairwise until `cluster_count` remain. Collapse
//! candidates are the component pairs still joined by a live MST edge; each
//! step merges the pair whose union the caller-supplied criterion scores
//! cheapest, ties resolving to the earliest candidate edge in MST order.
//!
//! The criterion itself is deliberately pluggable: the engine fixes only the
//! control flow and hands the criterion per-component dispersion summaries.
//! With an empty threshold list the schedule starts from all singletons and
//! collapses with the criterion throughout; that variant rescans the live
//! edges once per step and is intended for small inputs.

use tracing::debug;

use crate::{error::GenieError, labels::Clustering, mst::Mst};

use super::genie::GenieEngine;

/// Per-component dispersion summary handed to an [`InformationCriterion`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterDispersion {
    /// Number of points in the component.
    pub size: usize,
    /// Sum of the MST edge weights consumed inside the component.
    pub weight_sum: f64,
}

/// Caller-supplied scoring for collapsing an over-merged partition.
///
/// `merge_cost` returns the penalty of replacing `left` and `right` by their
/// union in a `dimensionality`-dimensional space; lower is cheaper. The
/// engine merges the cheapest MST-adjacent pair each step.
pub trait InformationCriterion {
    /// Returns the penalty of merging `left` and `right`.
    fn merge_cost(
        &self,
        left: ClusterDispersion,
        right: ClusterDispersion,
        dimensionality: f64,
    ) -> f64;
}

/// Run state for the information-criterion schedule.
pub(crate) struct GicEngine<'a, W> {
    engine: GenieEngine<'a, W>,
    cluster_count: usize,
    weight_sums: Vec<f64>,
}

impl<'a, W: Copy + PartialOrd + Into<f64>> GicEngine<'a, W> {
    pub(crate) fn new(
        mst: &'a Mst<'a, W>,
        cluster_count: usize,
        noise_leaves: bool,
    ) -> Result<Self, GenieError> {
        let engine = GenieEngine::new(mst, cluster_count, noise_leaves)?;
        let weight_sums = vec![0.0; engine.point_count()];
        Ok(Self {
            engine,
            cluster_count,
            weight_sums,
        })
    }

    pub(crate) fn run<C: InformationCriterion>(
        mut self,
        add_clusters: usize,
        thresholds: &[f64],
        dimensionality: f64,
        criterion: &C,
    ) -> Result<Clustering<W>, GenieError> {
        let start = self.engine.set_count();
        let over_target = self
            .cluster_count
            .saturating_add(add_clusters)
            .min(start);

        if !thresholds.is_empty() {
            // Divide the over-merge steps evenly across the thresholds,
            // remainder to the earlier ones.
            let total = start - over_target;
            let share = total / thresholds.len();
            let mut remainder = total % thresholds.len();
            let mut remaining = start;
            for &threshold in thresholds {
                let steps = share + usize::from(remainder > 0);
                remainder = remainder.saturating_sub(1);
                remaining -= steps;
                self.engine.merge_to(remaining, threshold)?;
            }
        }

        self.replay_weight_sums()?;
        debug!(
            over_merged = self.engine.set_count(),
            target = self.cluster_count,
            "collapsing with the information criterion",
        );

        while self.engine.set_count() > self.cluster_count {
            let edge = self.cheapest_merge(dimensionality, criterion)?;
            self.collapse_step(edge)?;
        }

        self.engine.into_clustering()
    }

    /// Folds the edge weights consumed during the over-merge phase into
    /// per-root dispersion sums. Replaying the merge log in order keeps each
    /// absorbed component's accumulated weight with its surviving root.
    fn replay_weight_sums(&mut self) -> Result<(), GenieError> {
        let merges: Vec<(usize, usize, f64)> = self
            .engine
            .merges
            .iter()
            .map(|step| {
                (
                    step.surviving_root(),
                    step.absorbed_root(),
                    step.weight().into(),
                )
            })
            .collect();
        for (surviving, absorbed, weight) in merges {
            let survivor = self.denoised_root(surviving)?;
            let folded = self.denoised_root(absorbed)?;
            self.weight_sums[survivor] += self.weight_sums[folded] + weight;
        }
        Ok(())
    }

    /// Scans the live edges for the cheapest cross-component merge.
    fn cheapest_merge<C: InformationCriterion>(
        &mut self,
        dimensionality: f64,
        criterion: &C,
    ) -> Result<usize, GenieError> {
        let sentinel = self.engine.edges.sentinel();
        let mut cursor = self.engine.edges.head();
        let mut best: Option<(f64, usize)> = None;
        while cursor != sentinel {
            let (left, right) = self.endpoint_roots(cursor)?;
            if left == right {
                // Only a non-tree input can leave an edge inside a single
                // component; drop it so later scans skip it.
                cursor = self.engine.edges.remove(cursor);
                continue;
            }
            let cost = criterion.merge_cost(
                self.dispersion(left),
                self.dispersion(right),
                dimensionality,
            );
            if best.map_or(true, |(lowest, _)| cost < lowest) {
                best = Some((cost, cursor));
            }
            cursor = self.engine.edges.next(cursor);
        }
        best.map(|(_, edge)| edge)
            .ok_or(GenieError::InsufficientEdges)
    }

    /// Merges the endpoint components of `edge` and folds their dispersion.
    fn collapse_step(&mut self, edge: usize) -> Result<(), GenieError> {
        let (left, right) = self.endpoint_roots(edge)?;
        self.engine.edges.remove(edge);
        self.engine.consume(edge)?;
        let survivor = left.min(right);
        let edge_weight: f64 = self.engine.weight_of(edge).into();
        self.weight_sums[survivor] =
            self.weight_sums[left] + self.weight_sums[right] + edge_weight;
        Ok(())
    }

    fn endpoint_roots(&mut self, edge: usize) -> Result<(usize, usize), GenieError> {
        let (left, right) = self.engine.endpoints_of(edge);
        Ok((
            self.engine.find_component(left)?,
            self.engine.find_component(right)?,
        ))
    }

    fn dispersion(&self, root: usize) -> ClusterDispersion {
        ClusterDispersion {
            size: self.engine.size_at_root(root),
            weight_sum: self.weight_sums[root],
        }
    }

    fn denoised_root(&self, original: usize) -> Result<usize, GenieError> {
        self.engine
            .denoised_of(original)
            .ok_or(GenieError::InvariantViolation {
                invariant: "a merge log entry names a noise vertex as root",
            })
    }
}
