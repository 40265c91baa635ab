//! Error types for the clustering core.
//!
//! Defines the error enum surfaced by the run entry points, a stable code
//! enum for logging surfaces, and a convenient result alias. Parameter and
//! input defects carry enough context to be actionable; the internal variants
//! (`Partition`, `InsufficientEdges`, `InvariantViolation`) are unreachable
//! for well-formed spanning trees and signal a defect in either the input or
//! the engine.

use thiserror::Error;

use crate::{mst::MstError, partition::PartitionError};

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GenieError>;

/// Error type produced while configuring or running a clustering schedule.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenieError {
    /// The requested cluster count is outside `[1, m]`, where `m` counts the
    /// points left after noise removal.
    #[error("cluster count {requested} is outside [1, {available}] for this tree")]
    InvalidClusterCount {
        /// Cluster count requested by the caller.
        requested: usize,
        /// Number of clusterable (non-noise) points.
        available: usize,
    },
    /// A Gini threshold fell outside `[0, 1]` or was not finite.
    #[error("gini threshold {got} is outside [0, 1]")]
    InvalidThreshold {
        /// The rejected threshold.
        got: f64,
    },
    /// The dimensionality handed to the information criterion was not a
    /// positive finite number.
    #[error("dimensionality {got} must be positive and finite")]
    InvalidDimensionality {
        /// The rejected dimensionality.
        got: f64,
    },
    /// Noise-leaf mode found a single leaf, which no tree-shaped input can
    /// produce.
    #[error("noise-leaf mode found {found} leaf, but trees have two or more")]
    InsufficientLeaves {
        /// Number of leaves found.
        found: usize,
    },
    /// The spanning tree view failed validation.
    #[error("ill-formed spanning tree")]
    Mst {
        /// The underlying validation failure.
        #[from]
        source: MstError,
    },
    /// A disjoint-set operation failed mid-run.
    #[error("partition defect")]
    Partition {
        /// The underlying disjoint-set failure.
        #[from]
        source: PartitionError,
    },
    /// The engine ran out of usable edges before reaching the requested
    /// cluster count.
    #[error("ran out of usable edges before reaching the requested cluster count")]
    InsufficientEdges,
    /// An internal invariant was violated, indicating a logic error.
    #[error("internal invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

impl GenieError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GenieErrorCode {
        match self {
            Self::InvalidClusterCount { .. } => GenieErrorCode::InvalidClusterCount,
            Self::InvalidThreshold { .. } => GenieErrorCode::InvalidThreshold,
            Self::InvalidDimensionality { .. } => GenieErrorCode::InvalidDimensionality,
            Self::InsufficientLeaves { .. } => GenieErrorCode::InsufficientLeaves,
            Self::Mst { .. } => GenieErrorCode::MstIllFormed,
            Self::Partition { .. } => GenieErrorCode::PartitionDefect,
            Self::InsufficientEdges => GenieErrorCode::InsufficientEdges,
            Self::InvariantViolation { .. } => GenieErrorCode::InvariantViolation,
        }
    }

    /// Retrieves the inner [`MstError`] code when validation failed.
    #[must_use]
    pub const fn mst_code(&self) -> Option<crate::mst::MstErrorCode> {
        match self {
            Self::Mst { source } => Some(source.code()),
            _ => None,
        }
    }

    /// Retrieves the inner [`PartitionError`] code for disjoint-set defects.
    #[must_use]
    pub const fn partition_code(&self) -> Option<crate::partition::PartitionErrorCode> {
        match self {
            Self::Partition { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Machine-readable error codes for [`GenieError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GenieErrorCode {
    /// The requested cluster count is outside `[1, m]`.
    InvalidClusterCount,
    /// A Gini threshold fell outside `[0, 1]`.
    InvalidThreshold,
    /// The information-criterion dimensionality was not positive and finite.
    InvalidDimensionality,
    /// Noise-leaf mode found a single leaf.
    InsufficientLeaves,
    /// The spanning tree view failed validation.
    MstIllFormed,
    /// A disjoint-set operation failed mid-run.
    PartitionDefect,
    /// The engine ran out of usable edges.
    InsufficientEdges,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl GenieErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidClusterCount => "INVALID_CLUSTER_COUNT",
            Self::InvalidThreshold => "INVALID_THRESHOLD",
            Self::InvalidDimensionality => "INVALID_DIMENSIONALITY",
            Self::InsufficientLeaves => "INSUFFICIENT_LEAVES",
            Self::MstIllFormed => "MST_ILL_FORMED",
            Self::PartitionDefect => "PARTITION_DEFECT",
            Self::InsufficientEdges => "INSUFFICIENT_EDGES",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}
