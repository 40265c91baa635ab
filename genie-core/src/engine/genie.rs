//! The Genie+ merge engine.
//!
//! Walks MST edges in weight order, merging components in a Gini-tracking
//! union-find. Whenever the Gini index of the component sizes exceeds the
//! configured threshold, the next merge is diverted to the first live edge
//! touching a smallest component, which caps how far any one cluster can run
//! ahead of the rest. With a threshold of 1 the correction never fires and
//! the schedule degenerates to single linkage.
//!
//! In noise-leaf mode, MST leaves are removed from the clustering universe
//! before any merging and reported as noise in the final labelling. The
//! interior vertices of a tree always induce a connected subtree, so the
//! remaining edges still span the denoised universe.

use tracing::debug;

use crate::{
    error::GenieError,
    labels::{Clustering, MergeStep, NOISE_LABEL},
    mst::Mst,
    partition::GiniDisjointSets,
};

use super::skiplist::EdgeSkiplist;

/// Translation between original vertex ids and the denoised universe.
///
/// When noise-leaf mode is off both tables are the identity. Otherwise
/// `forward[j]` names the original vertex behind denoised id `j`, and
/// `reverse` inverts it with `None` marking noise. `forward` is strictly
/// increasing, so root order in the denoised universe matches root order
/// over original indices.
#[derive(Clone, Debug)]
pub(super) struct NoiseMap {
    forward: Vec<usize>,
    reverse: Vec<Option<usize>>,
    noise_count: usize,
}

impl NoiseMap {
    fn identity(node_count: usize) -> Self {
        Self {
            forward: (0..node_count).collect(),
            reverse: (0..node_count).map(Some).collect(),
            noise_count: 0,
        }
    }

    fn without_leaves(degrees: &[usize]) -> Self {
        let mut forward = Vec::new();
        let mut reverse = vec![None; degrees.len()];
        let mut noise_count = 0;
        for (vertex, &degree) in degrees.iter().enumerate() {
            if degree == 1 {
                noise_count += 1;
            } else {
                reverse[vertex] = Some(forward.len());
                forward.push(vertex);
            }
        }
        debug_assert_eq!(forward.len() + noise_count, degrees.len());
        Self {
            forward,
            reverse,
            noise_count,
        }
    }

    /// Number of clusterable points.
    #[rustfmt::skip]
    fn point_count(&self) -> usize { self.forward.len() }

    /// Denoised id of an original vertex, `None` for noise.
    #[rustfmt::skip]
    fn reverse(&self, vertex: usize) -> Option<usize> { self.reverse[vertex] }

    /// Original vertex behind a denoised id.
    #[rustfmt::skip]
    fn original(&self, element: usize) -> usize { self.forward[element] }
}

/// Single-run merge state shared by the Genie+ and GIC schedules.
#[derive(Debug)]
pub(crate) struct GenieEngine<'a, W> {
    mst: &'a Mst<'a, W>,
    noise: NoiseMap,
    pub(super) sets: GiniDisjointSets,
    pub(super) edges: EdgeSkiplist,
    probe: usize,
    last_smallest: usize,
    pub(super) merges: Vec<MergeStep<W>>,
}

impl<'a, W: Copy + PartialOrd> GenieEngine<'a, W> {
    /// Builds the run state: degree scan, noise tables, skiplist, and the
    /// Gini-tracking partition over the denoised universe.
    pub(crate) fn new(
        mst: &'a Mst<'a, W>,
        cluster_count: usize,
        noise_leaves: bool,
    ) -> Result<Self, GenieError> {
        let degrees = mst.vertex_degrees();
        let noise = if noise_leaves {
            NoiseMap::without_leaves(&degrees)
        } else {
            NoiseMap::identity(mst.node_count())
        };
        if noise_leaves && noise.noise_count == 1 {
            return Err(GenieError::InsufficientLeaves { found: 1 });
        }

        let point_count = noise.point_count();
        if cluster_count == 0 || cluster_count > point_count {
            return Err(GenieError::InvalidClusterCount {
                requested: cluster_count,
                available: point_count,
            });
        }

        let edges = if noise_leaves {
            EdgeSkiplist::interior_edges(mst.endpoints(), &degrees)
        } else {
            EdgeSkiplist::all_edges(mst.edge_count())
        };
        let probe = edges.head();

        debug!(
            node_count = mst.node_count(),
            point_count,
            noise_count = noise.noise_count,
            cluster_count,
            "prepared merge state",
        );

        Ok(Self {
            mst,
            noise,
            sets: GiniDisjointSets::new(point_count),
            edges,
            probe,
            last_smallest: 0,
            merges: Vec::with_capacity(point_count.saturating_sub(cluster_count)),
        })
    }

    /// Number of clusterable points (`m`).
    #[rustfmt::skip]
    pub(super) fn point_count(&self) -> usize { self.noise.point_count() }

    /// Current number of components.
    #[rustfmt::skip]
    pub(super) fn set_count(&self) -> usize { self.sets.set_count() }

    /// Merges until `target` components remain, diverting to the Genie
    /// correction whenever the size inequity exceeds `gini_threshold`.
    pub(crate) fn merge_to(&mut self, target: usize, gini_threshold: f64) -> Result<(), GenieError> {
        while self.sets.set_count() > target {
            let edge = if self.sets.gini() > gini_threshold {
                self.corrected_edge()?
            } else {
                self.lightest_edge()?
            };
            self.consume(edge)?;
        }
        Ok(())
    }

    /// Takes the next edge in weight order.
    fn lightest_edge(&mut self) -> Result<usize, GenieError> {
        let head = self.edges.head();
        if head == self.edges.sentinel() {
            return Err(GenieError::InsufficientEdges);
        }
        self.edges.remove(head);
        Ok(head)
    }

    /// Takes the first live edge touching a smallest component.
    ///
    /// The probe resumes where the previous correction left off: component
    /// sizes only grow, so while the smallest size is unchanged, edges the
    /// probe already passed cannot have started touching a smallest
    /// component. A changed smallest size, or a probe left behind the head by
    /// plain merges, re-anchors the scan at the head. List order coincides
    /// with index order, so staleness is the integer comparison
    /// `probe < head`.
    fn corrected_edge(&mut self) -> Result<usize, GenieError> {
        let smallest = self
            .sets
            .smallest_size()
            .ok_or(GenieError::InvariantViolation {
                invariant: "size index is empty during a correction",
            })?;
        if smallest != self.last_smallest || self.probe < self.edges.head() {
            self.probe = self.edges.head();
        }

        loop {
            if self.probe == self.edges.sentinel() {
                return Err(GenieError::InsufficientEdges);
            }
            let (left, right) = self.mst.endpoints()[self.probe];
            if self.touches_size(left, smallest)? || self.touches_size(right, smallest)? {
                break;
            }
            self.probe = self.edges.next(self.probe);
        }

        let chosen = self.probe;
        self.probe = self.edges.remove(chosen);
        self.last_smallest = smallest;
        Ok(chosen)
    }

    fn touches_size(&mut self, vertex: usize, size: usize) -> Result<bool, GenieError> {
        let element = self.denoised(vertex)?;
        Ok(self.sets.size_of(element)? == size)
    }

    /// Merges the endpoint components of `edge` and records the step.
    ///
    /// The caller is responsible for having removed `edge` from the skiplist.
    pub(super) fn consume(&mut self, edge: usize) -> Result<(), GenieError> {
        let (left, right) = self.mst.endpoints()[edge];
        let left_root = self.find_component(left)?;
        let right_root = self.find_component(right)?;
        let survivor = self.sets.merge(left_root, right_root)?;
        let absorbed = if survivor == left_root {
            right_root
        } else {
            left_root
        };
        let size = self.sets.size_of(survivor)?;
        self.merges.push(MergeStep::new(
            self.noise.original(survivor),
            self.noise.original(absorbed),
            self.mst.weights()[edge],
            size,
        ));
        Ok(())
    }

    /// Root of the component containing an original vertex.
    pub(super) fn find_component(&mut self, vertex: usize) -> Result<usize, GenieError> {
        let element = self.denoised(vertex)?;
        Ok(self.sets.find(element)?)
    }

    /// Endpoint pair of an edge.
    #[rustfmt::skip]
    pub(super) fn endpoints_of(&self, edge: usize) -> (usize, usize) { self.mst.endpoints()[edge] }

    /// Weight of an edge.
    #[rustfmt::skip]
    pub(super) fn weight_of(&self, edge: usize) -> W { self.mst.weights()[edge] }

    /// Size of the component rooted at `root`.
    #[rustfmt::skip]
    pub(super) fn size_at_root(&self, root: usize) -> usize { self.sets.root_size(root) }

    /// Denoised id of an original vertex, `None` for noise.
    #[rustfmt::skip]
    pub(super) fn denoised_of(&self, vertex: usize) -> Option<usize> { self.noise.reverse(vertex) }

    fn denoised(&self, vertex: usize) -> Result<usize, GenieError> {
        self.noise
            .reverse(vertex)
            .ok_or(GenieError::InvariantViolation {
                invariant: "a live edge touches a noise leaf",
            })
    }

    /// Emits stable labels: scanning original indices, the first vertex seen
    /// from each component claims the next cluster id, and noise vertices
    /// take [`NOISE_LABEL`].
    pub(super) fn assign_labels(&mut self) -> Result<(Vec<i64>, usize), GenieError> {
        let node_count = self.mst.node_count();
        let mut canonical_id: Vec<Option<usize>> = vec![None; node_count];
        let mut labels = vec![NOISE_LABEL; node_count];
        let mut cluster_count = 0_usize;

        for vertex in 0..node_count {
            let Some(element) = self.noise.reverse(vertex) else {
                continue;
            };
            let root = self.sets.find(element)?;
            let canonical = self.noise.original(root);
            let id = match canonical_id[canonical] {
                Some(id) => id,
                None => {
                    let id = cluster_count;
                    canonical_id[canonical] = Some(id);
                    cluster_count += 1;
                    id
                }
            };
            labels[vertex] = id as i64;
        }

        Ok((labels, cluster_count))
    }

    /// Labels the final partition and releases the merge log.
    pub(crate) fn into_clustering(mut self) -> Result<Clustering<W>, GenieError> {
        let (labels, cluster_count) = self.assign_labels()?;
        debug!(cluster_count, merges = self.merges.len(), "labelled run");
        Ok(Clustering::new(labels, cluster_count, self.merges))
    }
}
