//! Nodes of the centered interval tree.
//!
//! A node either holds a short list of intervals that are searched linearly
//! (a leaf), or a pivot with two children and the intervals that straddle
//! the pivot. Straddling ("center") intervals are stored twice, once sorted
//! by left bound and once by right bound, so a query can stop scanning at
//! the first center interval that cannot contain the point.

use super::closure::Closure;
use super::key::{median, IntervalKey};
use super::sorting::{sort_values_and_indices, take};
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A node of an [`IntervalTree`](crate::IntervalTree), specialized on key
/// type `K` and closure mode `C`.
#[derive(Clone, Debug)]
pub struct IntervalNode<K, C> {
    n_elements: usize,
    kind: NodeKind<K, C>,
    closure: PhantomData<C>,
}

#[derive(Clone, Debug)]
enum NodeKind<K, C> {
    Leaf {
        left: Vec<K>,
        right: Vec<K>,
        indices: Vec<usize>,
    },
    Internal {
        pivot: K,
        left_node: Box<IntervalNode<K, C>>,
        right_node: Box<IntervalNode<K, C>>,

        // center intervals by ascending left bound
        center_left_values: Vec<K>,
        center_left_indices: Vec<usize>,

        // center intervals by ascending right bound
        center_right_values: Vec<K>,
        center_right_indices: Vec<usize>,
    },
}

/// Shape summary of a subtree: interval counts at every leaf, and the number
/// of center intervals at every internal node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeCounts {
    Leaf(usize),
    Internal {
        center: usize,
        left: Box<NodeCounts>,
        right: Box<NodeCounts>,
    },
}

impl NodeCounts {
    /// Total number of intervals in the subtree.
    pub fn total(&self) -> usize {
        match self {
            NodeCounts::Leaf(n) => *n,
            NodeCounts::Internal {
                center,
                left,
                right,
            } => center + left.total() + right.total(),
        }
    }
}

/// Split intervals into those that lie entirely before `pivot`, entirely
/// after it, and those that contain it. Each returned list holds positions
/// into `left`/`right` in ascending order, and every position appears in
/// exactly one list.
pub(crate) fn classify_intervals<K, C>(
    left: &[K],
    right: &[K],
    pivot: K,
) -> (Vec<usize>, Vec<usize>, Vec<usize>)
where
    K: IntervalKey,
    C: Closure,
{
    let mut left_ind = Vec::new();
    let mut right_ind = Vec::new();
    let mut overlapping_ind = Vec::new();

    for (i, (&l, &r)) in left.iter().zip(right).enumerate() {
        if C::before(r, pivot) {
            left_ind.push(i);
        } else if C::after(pivot, l) {
            right_ind.push(i);
        } else {
            overlapping_ind.push(i);
        }
    }

    (left_ind, right_ind, overlapping_ind)
}

// median(left + right) / 2, cast into the key type.
fn choose_pivot<K: IntervalKey>(left: &[K], right: &[K]) -> Option<K> {
    let mut sums: Vec<f64> = left
        .iter()
        .zip(right)
        .map(|(&l, &r)| K::bound_sum(l, r))
        .collect();
    median(&mut sums).and_then(|m| K::from_f64(m / 2.0))
}

impl<K, C> IntervalNode<K, C>
where
    K: IntervalKey,
    C: Closure,
{
    /// Build a node, and recursively its children, over the given intervals.
    /// `indices[i]` is the position reported for the interval
    /// `(left[i], right[i])`.
    pub fn new(left: Vec<K>, right: Vec<K>, indices: Vec<usize>, leaf_size: usize) -> Self {
        debug_assert_eq!(left.len(), right.len());
        debug_assert_eq!(left.len(), indices.len());

        let n_elements = left.len();
        if n_elements <= leaf_size {
            return Self::leaf(left, right, indices);
        }

        let pivot = match choose_pivot(&left, &right) {
            Some(pivot) => pivot,
            None => {
                debug!(
                    "no representable pivot for {} intervals, keeping a leaf",
                    n_elements
                );
                return Self::leaf(left, right, indices);
            }
        };

        let (left_set, right_set, center_set) = classify_intervals::<K, C>(&left, &right, pivot);

        // A child holding every interval would recurse forever. This happens
        // with empty open intervals, or integer pivots truncated onto an
        // excluded bound.
        if left_set.len() == n_elements || right_set.len() == n_elements {
            debug!(
                "pivot {:?} does not split {} intervals, keeping a leaf",
                pivot, n_elements
            );
            return Self::leaf(left, right, indices);
        }

        let left_node = Box::new(Self::new_child_node(
            &left, &right, &indices, &left_set, leaf_size,
        ));
        let right_node = Box::new(Self::new_child_node(
            &left, &right, &indices, &right_set, leaf_size,
        ));

        let (center_left_values, center_left_indices) =
            sort_values_and_indices(&left, &indices, &center_set);
        let (center_right_values, center_right_indices) =
            sort_values_and_indices(&right, &indices, &center_set);

        IntervalNode {
            n_elements,
            kind: NodeKind::Internal {
                pivot,
                left_node,
                right_node,
                center_left_values,
                center_left_indices,
                center_right_values,
                center_right_indices,
            },
            closure: PhantomData,
        }
    }

    fn leaf(left: Vec<K>, right: Vec<K>, indices: Vec<usize>) -> Self {
        IntervalNode {
            n_elements: left.len(),
            kind: NodeKind::Leaf {
                left,
                right,
                indices,
            },
            closure: PhantomData,
        }
    }

    fn new_child_node(
        left: &[K],
        right: &[K],
        indices: &[usize],
        subset: &[usize],
        leaf_size: usize,
    ) -> Self {
        Self::new(
            take(left, subset),
            take(right, subset),
            take(indices, subset),
            leaf_size,
        )
    }

    /// Push onto `result` the position of every interval in this subtree
    /// that contains `point`.
    ///
    /// Positions come out grouped by node (center intervals first, then the
    /// one child that can still match), but callers should only rely on the
    /// set of positions. Unordered points (NaN) match nothing.
    pub fn query(&self, result: &mut Vec<usize>, point: K) {
        match &self.kind {
            NodeKind::Leaf {
                left,
                right,
                indices,
            } => {
                // Once we get down to a certain size, it doesn't make sense
                // to continue the binary tree structure.
                for ((&l, &r), &idx) in left.iter().zip(right).zip(indices) {
                    if C::contains(l, r, point) {
                        result.push(idx);
                    }
                }
            }
            NodeKind::Internal {
                pivot,
                left_node,
                right_node,
                center_left_values,
                center_left_indices,
                center_right_values,
                center_right_indices,
            } => match point.partial_cmp(pivot) {
                Some(Ordering::Less) => {
                    for (&value, &idx) in center_left_values.iter().zip(center_left_indices) {
                        if !C::left_contains(value, point) {
                            break;
                        }
                        result.push(idx);
                    }
                    left_node.query(result, point);
                }
                Some(Ordering::Greater) => {
                    for (&value, &idx) in center_right_values
                        .iter()
                        .zip(center_right_indices)
                        .rev()
                    {
                        if !C::right_contains(point, value) {
                            break;
                        }
                        result.push(idx);
                    }
                    right_node.query(result, point);
                }
                // every center interval contains the pivot, and no interval
                // in either child does
                Some(Ordering::Equal) => result.extend_from_slice(center_left_indices),
                None => {}
            },
        }
    }

    /// Number of intervals in this subtree.
    pub fn n_elements(&self) -> usize {
        self.n_elements
    }

    /// Number of intervals stored at this node that straddle the pivot.
    /// Always zero for leaves.
    pub fn n_center(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => 0,
            NodeKind::Internal {
                center_left_indices,
                ..
            } => center_left_indices.len(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn pivot(&self) -> Option<K> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { pivot, .. } => Some(*pivot),
        }
    }

    /// Child holding intervals entirely before the pivot.
    pub fn left_node(&self) -> Option<&Self> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left_node, .. } => Some(&**left_node),
        }
    }

    /// Child holding intervals entirely after the pivot.
    pub fn right_node(&self) -> Option<&Self> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { right_node, .. } => Some(&**right_node),
        }
    }

    pub fn counts(&self) -> NodeCounts {
        match &self.kind {
            NodeKind::Leaf { .. } => NodeCounts::Leaf(self.n_elements),
            NodeKind::Internal {
                left_node,
                right_node,
                center_left_indices,
                ..
            } => NodeCounts::Internal {
                center: center_left_indices.len(),
                left: Box::new(left_node.counts()),
                right: Box::new(right_node.counts()),
            },
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => 1,
            NodeKind::Internal {
                left_node,
                right_node,
                ..
            } => 1 + left_node.depth().max(right_node.depth()),
        }
    }
}

impl<K, C> fmt::Display for IntervalNode<K, C>
where
    K: IntervalKey,
    C: Closure,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            NodeKind::Leaf { .. } => write!(
                f,
                "<IntervalNode(closed='{}'): {} elements (terminal)>",
                C::MODE,
                self.n_elements
            ),
            NodeKind::Internal {
                pivot,
                left_node,
                right_node,
                ..
            } => write!(
                f,
                "<IntervalNode(closed='{}'): pivot {:?}, {} elements ({} left, {} right, {} overlapping)>",
                C::MODE,
                pivot,
                self.n_elements,
                left_node.n_elements(),
                right_node.n_elements(),
                self.n_center()
            ),
        }
    }
}
