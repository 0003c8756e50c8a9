//! Implicit complete binary tree over level-order node indices.
//!
//! Nodes are addressed by level-order index: root 0, children of `i` at
//! `2i + 1` and `2i + 2`. The only storage is a packed is-inner bitset,
//! mutated while the pruning builder collapses subtrees.

use crate::bitbuf::BitBuffer;

/// A complete binary tree of `2n - 1` nodes with a mutable is-inner bitset.
#[derive(Clone, Debug)]
pub(crate) struct BinaryTree {
    /// Is-inner flag per node.
    inner: BitBuffer,
    /// Number of leaves at the bottom level.
    n: usize,
}

impl BinaryTree {
    /// A tree over `n` bottom-level leaves; `n` must be a power of two.
    ///
    /// Initially every node above the bottom level is inner.
    pub fn new(n: usize) -> Self {
        debug_assert!(n.is_power_of_two());
        let node_count = 2 * n - 1;
        let mut inner = BitBuffer::with_len(node_count);
        inner.set_range(0, n - 1);
        Self { inner, n }
    }

    #[inline]
    pub fn parent_of(i: usize) -> usize {
        (i - 1) / 2
    }

    #[inline]
    pub fn left_child_of(i: usize) -> usize {
        2 * i + 1
    }

    #[inline]
    pub fn right_child_of(i: usize) -> usize {
        2 * i + 2
    }

    /// Depth of node `i`; the root is at level 0.
    #[inline]
    pub fn level_of(i: usize) -> usize {
        (i + 1).ilog2() as usize
    }

    /// Total number of nodes, `2n - 1`.
    #[inline]
    pub fn max_node_count(&self) -> usize {
        2 * self.n - 1
    }

    #[inline]
    pub fn is_inner_node(&self, i: usize) -> bool {
        self.inner.get(i)
    }

    #[inline]
    pub fn is_leaf_node(&self, i: usize) -> bool {
        !self.is_inner_node(i)
    }

    /// Collapse node `i` into a leaf, detaching its subtree.
    #[inline]
    pub fn set_leaf(&mut self, i: usize) {
        self.inner.set(i, false);
    }
}
