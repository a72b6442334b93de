//! Choosing a closure mode at runtime.
//!
//! [`IntervalTree`] is specialized on its closure mode at compile time.
//! [`DynIntervalTree`] wraps the four specializations in an enum so the mode
//! can come from a string, e.g. a command line flag. Queries dispatch once on
//! the variant and then run the specialized code.

use super::closure::{ClosedBoth, ClosedLeft, ClosedNeither, ClosedRight, ClosureMode};
use super::error::Result;
use super::key::IntervalKey;
use super::tree::IntervalTree;
use std::fmt;

#[derive(Debug)]
pub enum DynIntervalTree<K> {
    Left(IntervalTree<K, ClosedLeft>),
    Right(IntervalTree<K, ClosedRight>),
    Both(IntervalTree<K, ClosedBoth>),
    Neither(IntervalTree<K, ClosedNeither>),
}

macro_rules! dispatch {
    ($self:expr, $tree:ident => $body:expr) => {
        match $self {
            DynIntervalTree::Left($tree) => $body,
            DynIntervalTree::Right($tree) => $body,
            DynIntervalTree::Both($tree) => $body,
            DynIntervalTree::Neither($tree) => $body,
        }
    };
}

/// Build a tree whose closure mode is named by `closed`: one of `"left"`,
/// `"right"`, `"both"` or `"neither"`.
///
/// # Examples
/// ```
/// let tree = centree::build(vec![0.0, 1.0], vec![2.0, 3.0], "both", 100).unwrap();
/// assert_eq!(tree.get_indexer_non_unique(&[2.5]), (vec![1], vec![]));
///
/// assert!(centree::build(vec![0.0], vec![1.0], "open", 100).is_err());
/// ```
pub fn build<K: IntervalKey>(
    left: Vec<K>,
    right: Vec<K>,
    closed: &str,
    leaf_size: usize,
) -> Result<DynIntervalTree<K>> {
    DynIntervalTree::with_leaf_size(left, right, closed.parse()?, leaf_size)
}

impl<K: IntervalKey> DynIntervalTree<K> {
    pub fn new(left: Vec<K>, right: Vec<K>, closed: ClosureMode) -> Result<Self> {
        Self::with_leaf_size(left, right, closed, super::tree::DEFAULT_LEAF_SIZE)
    }

    pub fn with_leaf_size(
        left: Vec<K>,
        right: Vec<K>,
        closed: ClosureMode,
        leaf_size: usize,
    ) -> Result<Self> {
        Ok(match closed {
            ClosureMode::Left => {
                DynIntervalTree::Left(IntervalTree::with_leaf_size(left, right, leaf_size)?)
            }
            ClosureMode::Right => {
                DynIntervalTree::Right(IntervalTree::with_leaf_size(left, right, leaf_size)?)
            }
            ClosureMode::Both => {
                DynIntervalTree::Both(IntervalTree::with_leaf_size(left, right, leaf_size)?)
            }
            ClosureMode::Neither => {
                DynIntervalTree::Neither(IntervalTree::with_leaf_size(left, right, leaf_size)?)
            }
        })
    }

    pub fn closed(&self) -> ClosureMode {
        dispatch!(self, tree => tree.closed())
    }

    pub fn len(&self) -> usize {
        dispatch!(self, tree => tree.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, tree => tree.is_empty())
    }

    pub fn leaf_size(&self) -> usize {
        dispatch!(self, tree => tree.leaf_size())
    }

    pub fn left(&self) -> &[K] {
        dispatch!(self, tree => tree.left())
    }

    pub fn right(&self) -> &[K] {
        dispatch!(self, tree => tree.right())
    }

    pub fn left_sorter(&self) -> &[usize] {
        dispatch!(self, tree => tree.left_sorter())
    }

    pub fn right_sorter(&self) -> &[usize] {
        dispatch!(self, tree => tree.right_sorter())
    }

    /// See [`IntervalTree::query`].
    pub fn query(&self, result: &mut Vec<usize>, point: K) {
        dispatch!(self, tree => tree.query(result, point))
    }

    pub fn query_point(&self, point: K) -> Vec<usize> {
        dispatch!(self, tree => tree.query_point(point))
    }

    pub fn get_loc(&self, point: K) -> Result<Vec<usize>> {
        dispatch!(self, tree => tree.get_loc(point))
    }

    pub fn get_loc_interval(&self, key_left: K, key_right: K) -> Vec<usize> {
        dispatch!(self, tree => tree.get_loc_interval(key_left, key_right))
    }

    pub fn get_indexer(&self, targets: &[K]) -> Result<Vec<i64>> {
        dispatch!(self, tree => tree.get_indexer(targets))
    }

    pub fn get_indexer_non_unique(&self, targets: &[K]) -> (Vec<i64>, Vec<usize>) {
        dispatch!(self, tree => tree.get_indexer_non_unique(targets))
    }
}

impl<K: IntervalKey> fmt::Display for DynIntervalTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        dispatch!(self, tree => fmt::Display::fmt(tree, f))
    }
}
