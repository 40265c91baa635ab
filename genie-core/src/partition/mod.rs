//! Partition state for the merge engines.
//!
//! A run owns one [`GiniDisjointSets`] over the denoised vertex universe.
//! The plain union-find lives in [`union_find`]; [`gini`] layers the ordered
//! size multiset and the running Gini numerator on top of it, backed by the
//! Fenwick-tree index in [`size_index`].

mod gini;
mod size_index;
mod union_find;

pub use self::{gini::GiniDisjointSets, union_find::DisjointSets};

use thiserror::Error;

/// Errors raised by disjoint-set operations.
///
/// For a well-formed spanning tree neither variant is reachable from the
/// merge engines; both signal an internal defect and abort the run.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum PartitionError {
    /// An element id fell outside the partitioned universe.
    #[error("element {element} is outside the universe of {universe} elements")]
    OutOfRange {
        /// The offending element id.
        element: usize,
        /// Number of elements being partitioned.
        universe: usize,
    },
    /// A merge was requested for two members of the same set.
    #[error("elements {left} and {right} are already members of the same set")]
    AlreadyMerged {
        /// First element named in the merge.
        left: usize,
        /// Second element named in the merge.
        right: usize,
    },
}

impl PartitionError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> PartitionErrorCode {
        match self {
            Self::OutOfRange { .. } => PartitionErrorCode::OutOfRange,
            Self::AlreadyMerged { .. } => PartitionErrorCode::AlreadyMerged,
        }
    }
}

/// Machine-readable error codes for [`PartitionError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PartitionErrorCode {
    /// An element id fell outside the partitioned universe.
    OutOfRange,
    /// A merge was requested for two members of the same set.
    AlreadyMerged,
}

impl PartitionErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::AlreadyMerged => "ALREADY_MERGED",
        }
    }
}

#[cfg(test)]
mod property;
