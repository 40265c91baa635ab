//! Merge engines.
//!
//! [`genie`] implements the Genie+ schedule: single-linkage consumption of
//! the MST with a Gini-driven correction. [`gic`] layers the
//! information-criterion schedule on top of it. Both share the intrusive
//! edge list in [`skiplist`] and a single [`crate::partition::GiniDisjointSets`]
//! per run; the engine owns both and mediates, so neither structure holds a
//! pointer to the other.

mod genie;
mod gic;
mod skiplist;

pub use self::gic::{ClusterDispersion, InformationCriterion};

pub(crate) use self::genie::GenieEngine;
pub(crate) use self::gic::GicEngine;
