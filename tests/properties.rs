use centree::{
    ClosedBoth, ClosedLeft, ClosedNeither, ClosedRight, Closure, ClosureMode, DynIntervalTree,
    IntervalTree, NodeCounts,
};
use proptest::prelude::*;

const N_VALUES: usize = 300;

// (left, right) with left <= right, drawn from a small domain so that
// shared endpoints and duplicate intervals are common.
fn arbitrary_interval() -> impl Strategy<Value = (i64, i64)> {
    (-50i64..50, 0i64..30).prop_map(|(first, len)| (first, first + len))
}

fn arbitrary_mode() -> impl Strategy<Value = ClosureMode> {
    prop::sample::select(ClosureMode::ALL.to_vec())
}

fn brute_force(intervals: &[(i64, i64)], mode: ClosureMode, point: i64) -> Vec<usize> {
    fn matching<C: Closure>(intervals: &[(i64, i64)], point: i64) -> Vec<usize> {
        intervals
            .iter()
            .enumerate()
            .filter(|(_, &(l, r))| C::contains(l, r, point))
            .map(|(i, _)| i)
            .collect()
    }

    match mode {
        ClosureMode::Left => matching::<ClosedLeft>(intervals, point),
        ClosureMode::Right => matching::<ClosedRight>(intervals, point),
        ClosureMode::Both => matching::<ClosedBoth>(intervals, point),
        ClosureMode::Neither => matching::<ClosedNeither>(intervals, point),
    }
}

fn depth_bound(counts: &NodeCounts) -> usize {
    match counts {
        NodeCounts::Leaf(_) => 1,
        NodeCounts::Internal { left, right, .. } => 1 + depth_bound(left).max(depth_bound(right)),
    }
}

proptest! {
    /// Every query agrees with a linear scan over the original arrays.
    #[test]
    fn prop_query_matches_brute_force(
        intervals in prop::collection::vec(arbitrary_interval(), 0..N_VALUES),
        points in prop::collection::vec(-60i64..90, 1..50),
        mode in arbitrary_mode(),
        leaf_size in 0usize..20,
    ) {
        let (left, right): (Vec<i64>, Vec<i64>) = intervals.iter().copied().unzip();
        let tree = DynIntervalTree::with_leaf_size(left, right, mode, leaf_size).unwrap();

        for point in points {
            let mut hits = tree.query_point(point);
            hits.sort_unstable();
            prop_assert_eq!(hits, brute_force(&intervals, mode, point));
        }
    }

    /// Construction terminates and accounts for every interval exactly once,
    /// however skewed the input.
    #[test]
    fn prop_counts_cover_all_intervals(
        intervals in prop::collection::vec(arbitrary_interval(), 0..N_VALUES),
        leaf_size in 0usize..8,
    ) {
        let (left, right): (Vec<i64>, Vec<i64>) = intervals.iter().copied().unzip();
        let tree: IntervalTree<i64, ClosedNeither> =
            IntervalTree::with_leaf_size(left, right, leaf_size).unwrap();

        let counts = tree.root().counts();
        prop_assert_eq!(counts.total(), intervals.len());
        prop_assert_eq!(depth_bound(&counts), tree.root().depth());
        prop_assert!(tree.root().depth() <= intervals.len() + 1);
    }

    /// Float keys, including duplicated and zero-length intervals.
    #[test]
    fn prop_float_query_matches_brute_force(
        intervals in prop::collection::vec((-100.0f64..100.0, 0.0f64..10.0), 0..N_VALUES),
        points in prop::collection::vec(-120.0f64..120.0, 1..50),
        leaf_size in 1usize..10,
    ) {
        let left: Vec<f64> = intervals.iter().map(|&(first, _)| first).collect();
        let right: Vec<f64> = intervals.iter().map(|&(first, len)| first + len).collect();
        let tree: IntervalTree<f64, ClosedLeft> =
            IntervalTree::with_leaf_size(left.clone(), right.clone(), leaf_size).unwrap();

        // bounds themselves are the interesting points
        for point in points.into_iter().chain(left.iter().copied()).chain(right.iter().copied()) {
            let mut hits = tree.query_point(point);
            hits.sort_unstable();
            let expected: Vec<usize> = (0..left.len())
                .filter(|&i| ClosedLeft::contains(left[i], right[i], point))
                .collect();
            prop_assert_eq!(hits, expected);
        }
    }
}
