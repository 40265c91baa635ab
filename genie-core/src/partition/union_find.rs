//! Union-find with the parent-dominance invariant.
//!
//! Union is deliberately naive: neither by rank nor by size. Attaching the
//! larger root id beneath the smaller keeps `parent[i] <= i` for every
//! element, so the root of a set is always its smallest member. Both the
//! labelling stage and the Gini bookkeeping rely on that ordering.

use super::PartitionError;

/// Disjoint-set structure over `{0, ..., element_count - 1}`.
///
/// # Examples
/// ```
/// use genie_core::DisjointSets;
///
/// let mut sets = DisjointSets::new(4);
/// assert_eq!(sets.merge(1, 3)?, 1);
/// assert_eq!(sets.find(3)?, 1);
/// assert_eq!(sets.set_count(), 3);
/// # Ok::<(), genie_core::PartitionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSets {
    parent: Vec<usize>,
    set_count: usize,
}

impl DisjointSets {
    /// Creates the discrete partition `{{0}, {1}, ..., {element_count - 1}}`.
    #[must_use]
    pub fn new(element_count: usize) -> Self {
        Self {
            parent: (0..element_count).collect(),
            set_count: element_count,
        }
    }

    /// Returns the number of elements being partitioned.
    #[must_use]
    #[rustfmt::skip]
    pub fn element_count(&self) -> usize { self.parent.len() }

    /// Returns the current number of sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    /// Finds the root (smallest member) of the set containing `element`.
    ///
    /// Path compression runs iteratively in two passes, so deep parent chains
    /// cannot overflow the stack.
    ///
    /// # Errors
    /// Returns [`PartitionError::OutOfRange`] when `element` is outside the
    /// universe.
    pub fn find(&mut self, element: usize) -> Result<usize, PartitionError> {
        if element >= self.parent.len() {
            return Err(PartitionError::OutOfRange {
                element,
                universe: self.parent.len(),
            });
        }

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cursor = element;
        while self.parent[cursor] != cursor {
            let next = self.parent[cursor];
            self.parent[cursor] = root;
            cursor = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right` and returns the
    /// surviving root, which is the smaller of the two roots.
    ///
    /// # Errors
    /// Returns [`PartitionError::OutOfRange`] for an element outside the
    /// universe and [`PartitionError::AlreadyMerged`] when both elements
    /// already share a set.
    pub fn merge(&mut self, left: usize, right: usize) -> Result<usize, PartitionError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Err(PartitionError::AlreadyMerged { left, right });
        }

        let (survivor, absorbed) = if left_root < right_root {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parent[absorbed] = survivor;
        self.set_count -= 1;
        Ok(survivor)
    }
}
