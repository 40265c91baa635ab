//! Clustering results.
//!
//! A run yields a [`Clustering`]: one label per original vertex, with noise
//! points marked [`NOISE_LABEL`], plus the merge log for callers that want to
//! rebuild the dendrogram.

/// Label assigned to noise points.
pub const NOISE_LABEL: i64 = -1;

/// One accepted merge, in the order the engine took them.
///
/// Roots are reported as original vertex indices; the parent-dominance
/// invariant makes each root the smallest original index of its component, so
/// the surviving root is always strictly smaller than the absorbed one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergeStep<W> {
    surviving_root: usize,
    absorbed_root: usize,
    weight: W,
    size: usize,
}

impl<W: Copy> MergeStep<W> {
    pub(crate) fn new(surviving_root: usize, absorbed_root: usize, weight: W, size: usize) -> Self {
        Self {
            surviving_root,
            absorbed_root,
            weight,
            size,
        }
    }

    /// Returns the root that survived the merge.
    #[must_use]
    #[rustfmt::skip]
    pub fn surviving_root(&self) -> usize { self.surviving_root }

    /// Returns the root that was absorbed.
    #[must_use]
    #[rustfmt::skip]
    pub fn absorbed_root(&self) -> usize { self.absorbed_root }

    /// Returns the weight of the MST edge that triggered the merge.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> W { self.weight }

    /// Returns the size of the merged component right after the merge.
    #[must_use]
    #[rustfmt::skip]
    pub fn size(&self) -> usize { self.size }
}

/// The output of a clustering run.
///
/// Labels are contiguous ids in `[0, cluster_count)` assigned in order of
/// first appearance while scanning original vertex indices, which makes the
/// labelling stable across re-runs and independent of merge order. Noise
/// points carry [`NOISE_LABEL`].
///
/// # Examples
/// ```
/// use genie_core::{GenieBuilder, Mst};
///
/// let weights = [1.0_f64, 1.0, 4.0];
/// let endpoints = [(0, 1), (2, 3), (1, 2)];
/// let mst = Mst::new(4, &weights, &endpoints)?;
/// let clustering = GenieBuilder::new().build()?.run(&mst)?;
/// assert_eq!(clustering.labels(), &[0, 0, 1, 1]);
/// assert_eq!(clustering.cluster_count(), 2);
/// assert_eq!(clustering.merges().len(), 2);
/// # Ok::<(), genie_core::GenieError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Clustering<W> {
    labels: Vec<i64>,
    cluster_count: usize,
    merges: Vec<MergeStep<W>>,
}

impl<W: Copy> Clustering<W> {
    pub(crate) fn new(labels: Vec<i64>, cluster_count: usize, merges: Vec<MergeStep<W>>) -> Self {
        Self {
            labels,
            cluster_count,
            merges,
        }
    }

    /// Returns one label per original vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &[i64] { &self.labels }

    /// Returns the number of non-empty clusters.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns the accepted merges in the order they were taken.
    #[must_use]
    #[rustfmt::skip]
    pub fn merges(&self) -> &[MergeStep<W>] { &self.merges }

    /// Returns the number of vertices labelled as noise.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.labels
            .iter()
            .filter(|&&label| label == NOISE_LABEL)
            .count()
    }
}
