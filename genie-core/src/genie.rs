//! Entry points for running the clustering schedules.

use tracing::debug;

use crate::{
    engine::{GenieEngine, GicEngine, InformationCriterion},
    error::Result,
    labels::Clustering,
    mst::Mst,
};

/// Runs the Genie+ schedule: single linkage with the Gini correction.
///
/// Construct through [`crate::GenieBuilder`]. One instance can run any number
/// of trees; all per-run state is internal to [`Genie::run`].
///
/// # Examples
/// ```
/// use genie_core::{GenieBuilder, Mst};
///
/// // A path 0-1-2-3 whose heavy middle edge separates two pairs.
/// let weights = [1.0_f64, 1.0, 4.0];
/// let endpoints = [(0, 1), (2, 3), (1, 2)];
/// let mst = Mst::new(4, &weights, &endpoints)?;
///
/// let genie = GenieBuilder::new().with_cluster_count(2).build()?;
/// let clustering = genie.run(&mst)?;
/// assert_eq!(clustering.labels(), &[0, 0, 1, 1]);
/// # Ok::<(), genie_core::GenieError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Genie {
    cluster_count: usize,
    gini_threshold: f64,
    noise_leaves: bool,
}

impl Genie {
    pub(crate) fn new(cluster_count: usize, gini_threshold: f64, noise_leaves: bool) -> Self {
        Self {
            cluster_count,
            gini_threshold,
            noise_leaves,
        }
    }

    /// Returns the number of clusters this instance produces.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns the Gini threshold above which the correction fires.
    #[must_use]
    #[rustfmt::skip]
    pub fn gini_threshold(&self) -> f64 { self.gini_threshold }

    /// Returns whether MST leaves are treated as noise.
    #[must_use]
    #[rustfmt::skip]
    pub fn noise_leaves(&self) -> bool { self.noise_leaves }

    /// Clusters the given tree and returns one label per vertex.
    ///
    /// # Errors
    /// Returns [`crate::GenieError::InvalidClusterCount`] when the configured
    /// cluster count is outside `[1, m]` for the denoised point count `m`,
    /// [`crate::GenieError::InsufficientLeaves`] when noise-leaf mode meets a
    /// tree with a single leaf, and the internal defect variants when the
    /// input is not actually a spanning tree.
    pub fn run<W: Copy + PartialOrd>(&self, mst: &Mst<'_, W>) -> Result<Clustering<W>> {
        debug!(
            node_count = mst.node_count(),
            cluster_count = self.cluster_count,
            gini_threshold = self.gini_threshold,
            noise_leaves = self.noise_leaves,
            "running the Genie+ schedule",
        );
        let mut engine = GenieEngine::new(mst, self.cluster_count, self.noise_leaves)?;
        engine.merge_to(self.cluster_count, self.gini_threshold)?;
        engine.into_clustering()
    }
}

/// Runs the Genie+information-criterion schedule.
///
/// Construct through [`crate::GicBuilder`]. The over-merge phase reuses the
/// Genie+ engine under a sequence of thresholds; the collapse phase delegates
/// scoring to the caller's [`InformationCriterion`].
#[derive(Debug, Clone)]
pub struct Gic {
    cluster_count: usize,
    add_clusters: usize,
    dimensionality: f64,
    thresholds: Vec<f64>,
    noise_leaves: bool,
}

impl Gic {
    pub(crate) fn new(
        cluster_count: usize,
        add_clusters: usize,
        dimensionality: f64,
        thresholds: Vec<f64>,
        noise_leaves: bool,
    ) -> Self {
        Self {
            cluster_count,
            add_clusters,
            dimensionality,
            thresholds,
            noise_leaves,
        }
    }

    /// Returns the number of clusters this instance produces.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns how many extra clusters the over-merge phase keeps.
    #[must_use]
    #[rustfmt::skip]
    pub fn add_clusters(&self) -> usize { self.add_clusters }

    /// Returns the dimensionality handed to the criterion.
    #[must_use]
    #[rustfmt::skip]
    pub fn dimensionality(&self) -> f64 { self.dimensionality }

    /// Returns the Gini threshold sequence for the over-merge phase.
    #[must_use]
    #[rustfmt::skip]
    pub fn thresholds(&self) -> &[f64] { &self.thresholds }

    /// Returns whether MST leaves are treated as noise.
    #[must_use]
    #[rustfmt::skip]
    pub fn noise_leaves(&self) -> bool { self.noise_leaves }

    /// Clusters the given tree, collapsing the over-merged partition with the
    /// supplied criterion.
    ///
    /// # Errors
    /// As for [`Genie::run`]; additionally the collapse phase surfaces
    /// [`crate::GenieError::InsufficientEdges`] when a non-tree input leaves
    /// it without a cross-component edge.
    pub fn run<W, C>(&self, mst: &Mst<'_, W>, criterion: &C) -> Result<Clustering<W>>
    where
        W: Copy + PartialOrd + Into<f64>,
        C: InformationCriterion,
    {
        debug!(
            node_count = mst.node_count(),
            cluster_count = self.cluster_count,
            add_clusters = self.add_clusters,
            threshold_count = self.thresholds.len(),
            noise_leaves = self.noise_leaves,
            "running the GIC schedule",
        );
        let engine = GicEngine::new(mst, self.cluster_count, self.noise_leaves)?;
        engine.run(
            self.add_clusters,
            &self.thresholds,
            self.dimensionality,
            criterion,
        )
    }
}
