//! # centree
//! `centree` implements a static centered interval tree for point-overlap
//! queries.
//!
//! The tree is built once from parallel arrays of left and right bounds and
//! never modified. Each internal node picks a pivot (half the median of
//! `left + right`), keeps the intervals that straddle it in two sorted
//! arrays, and hands the intervals entirely before or after it to its two
//! children. Small subtrees are stored as flat lists and searched linearly.
//! A point query walks a single root-to-leaf path, scanning each node's
//! straddling intervals only as far as they can still match.
//!
//! Whether intervals contain their endpoints is fixed per tree by a closure
//! type ([`ClosedLeft`], [`ClosedRight`], [`ClosedBoth`], [`ClosedNeither`]),
//! so every comparison is resolved at compile time. [`build`] and
//! [`DynIntervalTree`] pick the closure from a runtime string instead.
//!
//! Query results are positions into the original bound arrays.
//!
//! # Examples
//! ```
//! use centree::{ClosedLeft, IntervalTree, NO_MATCH};
//!
//! let tree: IntervalTree<f64, ClosedLeft> =
//!     IntervalTree::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap();
//!
//! assert_eq!(tree.get_loc(1.0).unwrap(), vec![1]);
//! assert_eq!(tree.get_indexer(&[0.5, 2.0, 3.0]).unwrap(), vec![0, 2, NO_MATCH]);
//! ```

mod closure;
mod dynamic;
mod error;
mod key;
mod node;
mod sorting;
mod tree;

pub use closure::{ClosedBoth, ClosedLeft, ClosedNeither, ClosedRight, Closure, ClosureMode};
pub use dynamic::{build, DynIntervalTree};
pub use error::{Error, Result};
pub use key::IntervalKey;
pub use node::{IntervalNode, NodeCounts};
pub use tree::{IntervalTree, DEFAULT_LEAF_SIZE, NO_MATCH};
