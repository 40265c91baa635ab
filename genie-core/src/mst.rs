//! Borrowed minimum spanning tree (MST) views.
//!
//! The clustering core consumes a precomputed MST: a weight sequence sorted
//! non-decreasingly and one endpoint pair per edge. [`Mst::new`] validates
//! the shape once; the engines then borrow the slices read-only for the
//! duration of a run. MST construction itself is a caller concern.

use thiserror::Error;

/// Errors raised while validating an MST view.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The edge arrays do not describe exactly `node_count - 1` edges.
    #[error("expected {expected} edges for {node_count} vertices, got {got}")]
    EdgeCountMismatch {
        /// Number of vertices in the tree.
        node_count: usize,
        /// Required edge count (`node_count - 1`).
        expected: usize,
        /// Edge count actually supplied.
        got: usize,
    },
    /// The weight sequence is not sorted non-decreasingly.
    ///
    /// A NaN weight adjacent to any other weight also fails this check, since
    /// neither ordering holds.
    #[error("edge weights are not sorted non-decreasingly at position {position}")]
    UnsortedWeights {
        /// Index of the first edge whose weight is smaller than its
        /// predecessor's.
        position: usize,
    },
    /// An edge connects a vertex to itself.
    #[error("edge {position} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Index of the offending edge.
        position: usize,
        /// The repeated endpoint.
        vertex: usize,
    },
    /// An edge references a vertex outside `{0, ..., node_count - 1}`.
    #[error("edge {position} references vertex {vertex}, but node_count is {node_count}")]
    EndpointOutOfRange {
        /// Index of the offending edge.
        position: usize,
        /// The out-of-range endpoint.
        vertex: usize,
        /// Number of vertices in the tree.
        node_count: usize,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EdgeCountMismatch { .. } => MstErrorCode::EdgeCountMismatch,
            Self::UnsortedWeights { .. } => MstErrorCode::UnsortedWeights,
            Self::SelfLoop { .. } => MstErrorCode::SelfLoop,
            Self::EndpointOutOfRange { .. } => MstErrorCode::EndpointOutOfRange,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The edge arrays do not describe exactly `node_count - 1` edges.
    EdgeCountMismatch,
    /// The weight sequence is not sorted non-decreasingly.
    UnsortedWeights,
    /// An edge connects a vertex to itself.
    SelfLoop,
    /// An edge references a vertex outside the tree.
    EndpointOutOfRange,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EdgeCountMismatch => "EDGE_COUNT_MISMATCH",
            Self::UnsortedWeights => "UNSORTED_WEIGHTS",
            Self::SelfLoop => "SELF_LOOP",
            Self::EndpointOutOfRange => "ENDPOINT_OUT_OF_RANGE",
        }
    }
}

/// A validated, borrowed view over a weight-sorted MST.
///
/// The `weights` slice holds the `node_count - 1` edge weights in
/// non-decreasing order; `endpoints[i]` names the unordered vertex pair
/// joined by the `i`-th edge. The engines never perform arithmetic on the
/// weights, so any `Copy + PartialOrd` type works.
///
/// # Examples
/// ```
/// use genie_core::Mst;
///
/// let weights = [1.0_f64, 2.0, 2.0];
/// let endpoints = [(0, 1), (1, 2), (2, 3)];
/// let mst = Mst::new(4, &weights, &endpoints)?;
/// assert_eq!(mst.node_count(), 4);
/// assert_eq!(mst.edge_count(), 3);
/// # Ok::<(), genie_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Mst<'a, W> {
    weights: &'a [W],
    endpoints: &'a [(usize, usize)],
    node_count: usize,
}

impl<'a, W: Copy + PartialOrd> Mst<'a, W> {
    /// Validates the edge arrays and wraps them into a view.
    ///
    /// # Errors
    /// Returns [`MstError::EdgeCountMismatch`] when either slice does not hold
    /// `node_count - 1` entries, [`MstError::UnsortedWeights`] when the weight
    /// sequence decreases anywhere, and [`MstError::SelfLoop`] or
    /// [`MstError::EndpointOutOfRange`] for malformed endpoint pairs.
    pub fn new(
        node_count: usize,
        weights: &'a [W],
        endpoints: &'a [(usize, usize)],
    ) -> Result<Self, MstError> {
        let expected = node_count.saturating_sub(1);
        if weights.len() != expected || endpoints.len() != expected {
            let got = if weights.len() != expected {
                weights.len()
            } else {
                endpoints.len()
            };
            return Err(MstError::EdgeCountMismatch {
                node_count,
                expected,
                got,
            });
        }

        for position in 1..weights.len() {
            if !(weights[position - 1] <= weights[position]) {
                return Err(MstError::UnsortedWeights { position });
            }
        }

        for (position, &(left, right)) in endpoints.iter().enumerate() {
            if left == right {
                return Err(MstError::SelfLoop {
                    position,
                    vertex: left,
                });
            }
            for vertex in [left, right] {
                if vertex >= node_count {
                    return Err(MstError::EndpointOutOfRange {
                        position,
                        vertex,
                        node_count,
                    });
                }
            }
        }

        Ok(Self {
            weights,
            endpoints,
            node_count,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of edges (`node_count - 1`).
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.weights.len() }

    /// Returns the edge weights, sorted non-decreasingly.
    #[must_use]
    #[rustfmt::skip]
    pub fn weights(&self) -> &'a [W] { self.weights }

    /// Returns the unordered endpoint pair of each edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn endpoints(&self) -> &'a [(usize, usize)] { self.endpoints }

    /// Counts the MST edges incident to each vertex.
    ///
    /// Vertices of degree 1 are the tree's leaves, which noise-leaf mode
    /// removes from the clustering universe.
    pub(crate) fn vertex_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0_usize; self.node_count];
        for &(left, right) in self.endpoints {
            degrees[left] += 1;
            degrees[right] += 1;
        }
        degrees
    }
}
