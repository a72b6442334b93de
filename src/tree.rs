//! The centered interval tree.

use super::closure::{Closure, ClosureMode};
use super::error::{Error, Result};
use super::key::IntervalKey;
use super::node::IntervalNode;
use super::sorting::{argsort, search_sorted};
use fnv::FnvHashSet;
use log::{debug, trace};
use std::fmt;
use std::sync::OnceLock;

/// Interval count at or below which a node stops subdividing and is
/// searched linearly. Tune this to trade build depth for scan length.
pub const DEFAULT_LEAF_SIZE: usize = 100;

/// Indexer entry for a target that lies in no interval.
pub const NO_MATCH: i64 = -1;

/// A static centered interval tree over intervals `(left[i], right[i])`,
/// answering which positions `i` contain a query point.
///
/// Which endpoints count as contained is fixed by the closure type `C`
/// (see [`Closure`]). The tree is never modified after construction, so it
/// can be shared between threads and queried concurrently.
///
/// # Examples
/// ```
/// use centree::{ClosedRight, IntervalTree};
///
/// let tree: IntervalTree<i64, ClosedRight> =
///     IntervalTree::new(vec![0, 1, 5], vec![2, 3, 7]).unwrap();
///
/// let mut hits = tree.query_point(1);
/// hits.sort();
/// assert_eq!(hits, vec![0]);
/// assert_eq!(tree.query_point(2).len(), 2);
/// ```
#[derive(Debug)]
pub struct IntervalTree<K, C> {
    left: Vec<K>,
    right: Vec<K>,
    root: IntervalNode<K, C>,
    leaf_size: usize,

    // only range queries use these
    left_sorter: OnceLock<Vec<usize>>,
    right_sorter: OnceLock<Vec<usize>>,
}

impl<K, C> IntervalTree<K, C>
where
    K: IntervalKey,
    C: Closure,
{
    /// Build a tree using [`DEFAULT_LEAF_SIZE`].
    pub fn new(left: Vec<K>, right: Vec<K>) -> Result<Self> {
        Self::with_leaf_size(left, right, DEFAULT_LEAF_SIZE)
    }

    /// Build a tree over `left.len()` intervals. Bounds are assumed to contain
    /// no NaNs and to satisfy `left[i] <= right[i]`.
    pub fn with_leaf_size(left: Vec<K>, right: Vec<K>, leaf_size: usize) -> Result<Self> {
        if left.len() != right.len() {
            return Err(Error::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        let indices: Vec<usize> = (0..left.len()).collect();
        let root: IntervalNode<K, C> = IntervalNode::new(left.clone(), right.clone(), indices, leaf_size);

        debug!(
            "built interval tree: {} elements, closed='{}', leaf_size={}, depth={}",
            root.n_elements(),
            C::MODE,
            leaf_size,
            root.depth()
        );

        Ok(IntervalTree {
            left,
            right,
            root,
            leaf_size,
            left_sorter: OnceLock::new(),
            right_sorter: OnceLock::new(),
        })
    }

    /// Number of intervals in the tree.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn left(&self) -> &[K] {
        &self.left
    }

    pub fn right(&self) -> &[K] {
        &self.right
    }

    pub fn root(&self) -> &IntervalNode<K, C> {
        &self.root
    }

    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    pub fn closed(&self) -> ClosureMode {
        C::MODE
    }

    /// Permutation sorting the left bounds, computed on first use.
    pub fn left_sorter(&self) -> &[usize] {
        self.left_sorter.get_or_init(|| argsort(&self.left))
    }

    /// Permutation sorting the right bounds, computed on first use.
    pub fn right_sorter(&self) -> &[usize] {
        self.right_sorter.get_or_init(|| argsort(&self.right))
    }

    /// Push the position of every interval containing `point` onto `result`.
    /// Positions already in `result` are left alone, so one buffer can
    /// accumulate the hits of several queries.
    #[inline]
    pub fn query(&self, result: &mut Vec<usize>, point: K) {
        self.root.query(result, point);
    }

    /// Positions of all intervals containing `point`, in no particular order.
    pub fn query_point(&self, point: K) -> Vec<usize> {
        let mut result = Vec::new();
        self.query(&mut result, point);
        result
    }

    /// Like [`query_point`](Self::query_point), but an empty result is an
    /// error.
    pub fn get_loc(&self, point: K) -> Result<Vec<usize>> {
        let result = self.query_point(point);
        if result.is_empty() {
            return Err(Error::KeyNotFound(format!("{:?}", point)));
        }
        Ok(result)
    }

    // Positions whose bound on the given side falls in [key_left, key_right).
    fn partial_overlap<'a>(
        values: &[K],
        sorter: &'a [usize],
        key_left: K,
        key_right: K,
    ) -> impl Iterator<Item = usize> + 'a {
        let i = search_sorted(values, sorter, key_left);
        let j = search_sorted(values, sorter, key_right).max(i);
        sorter[i..j].iter().copied()
    }

    /// Positions of intervals related to the closed range
    /// `[key_left, key_right]`: those with a left bound in the range, those
    /// with a right bound in the range, and those containing its midpoint.
    ///
    /// Bounds are found by binary search on the original arrays (upper key
    /// excluded), not through the tree, so this is coarser than an exact
    /// overlap query. Each position is reported once, in order of discovery.
    pub fn get_loc_interval(&self, key_left: K, key_right: K) -> Vec<usize> {
        let left_overlap =
            Self::partial_overlap(&self.left, self.left_sorter(), key_left, key_right);
        let right_overlap =
            Self::partial_overlap(&self.right, self.right_sorter(), key_left, key_right);
        let enclosing = self.query_point(key_left.halfway(key_right));

        let mut seen = FnvHashSet::default();
        left_overlap
            .chain(right_overlap)
            .chain(enclosing)
            .filter(|i| seen.insert(*i))
            .collect()
    }

    /// For each target, the position of the single interval containing it,
    /// or [`NO_MATCH`] if there is none.
    ///
    /// Fails with [`Error::NonUniqueMatch`] as soon as a target lies in more
    /// than one interval; no partial indexer is returned.
    pub fn get_indexer(&self, targets: &[K]) -> Result<Vec<i64>> {
        let mut result = Vec::with_capacity(targets.len());
        let mut hits = Vec::new();
        for (position, &target) in targets.iter().enumerate() {
            hits.clear();
            self.query(&mut hits, target);
            match hits.len() {
                0 => {
                    trace!("target {} ({:?}) matched no interval", position, target);
                    result.push(NO_MATCH);
                }
                1 => result.push(hits[0] as i64),
                matches => return Err(Error::NonUniqueMatch { position, matches }),
            }
        }
        Ok(result)
    }

    /// For each target, the positions of every interval containing it, or a
    /// single [`NO_MATCH`] if there are none. Also returns the positions of
    /// the targets that matched nothing.
    pub fn get_indexer_non_unique(&self, targets: &[K]) -> (Vec<i64>, Vec<usize>) {
        let mut result = Vec::with_capacity(targets.len());
        let mut missing = Vec::new();
        let mut hits = Vec::new();
        for (position, &target) in targets.iter().enumerate() {
            hits.clear();
            self.query(&mut hits, target);
            if hits.is_empty() {
                trace!("target {} ({:?}) matched no interval", position, target);
                result.push(NO_MATCH);
                missing.push(position);
            } else {
                result.extend(hits.iter().map(|&i| i as i64));
            }
        }
        (result, missing)
    }
}

impl<K, C> fmt::Display for IntervalTree<K, C>
where
    K: IntervalKey,
    C: Closure,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<IntervalTree: {} elements>", self.root.n_elements())
    }
}
