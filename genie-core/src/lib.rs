//! Genie+ hierarchical clustering core.
//!
//! Consumes a precomputed minimum spanning tree and produces a flat partition
//! into `k` clusters by merging components in edge-weight order, subject to
//! the Genie correction: whenever the Gini index of the component sizes
//! drifts above a threshold, the next merge must involve a smallest
//! component, which keeps any single cluster from swallowing the data set.
//! Outputs are deterministic: identical inputs yield bit-identical labels.
//!
//! Two schedules are provided:
//!
//! - [`Genie`] produces exactly `k` clusters (threshold 1 reduces to single
//!   linkage).
//! - [`Gic`] over-merges to `k + a` clusters under a threshold sequence and
//!   collapses back to `k` with a caller-supplied [`InformationCriterion`].
//!
//! MST construction, distance metrics, nearest-neighbour search, and
//! comparison metrics are out of scope; callers bring a validated tree via
//! [`Mst::new`] and read labels off the returned [`Clustering`], with `-1`
//! marking noise leaves when noise-leaf mode is on.

mod builder;
mod engine;
mod error;
mod genie;
mod labels;
mod mst;
mod partition;

pub use crate::{
    builder::{GenieBuilder, GicBuilder, DEFAULT_GIC_THRESHOLDS},
    engine::{ClusterDispersion, InformationCriterion},
    error::{GenieError, GenieErrorCode, Result},
    genie::{Genie, Gic},
    labels::{Clustering, MergeStep, NOISE_LABEL},
    mst::{Mst, MstError, MstErrorCode},
    partition::{DisjointSets, GiniDisjointSets, PartitionError, PartitionErrorCode},
};
