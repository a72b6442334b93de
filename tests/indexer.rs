use centree::{
    build, ClosedBoth, ClosedRight, ClosureMode, DynIntervalTree, Error, IntervalTree, NO_MATCH,
};

use rand::{thread_rng, Rng};

fn disjoint_tree(leaf_size: usize) -> IntervalTree<i64, ClosedRight> {
    // (0,10], (10,20], ..., (990,1000]
    let left: Vec<i64> = (0..100).map(|i| i * 10).collect();
    let right: Vec<i64> = left.iter().map(|l| l + 10).collect();
    IntervalTree::with_leaf_size(left, right, leaf_size).unwrap()
}

#[test]
fn unique_indexer_disjoint() {
    for &leaf_size in &[1, 7, 100] {
        let tree = disjoint_tree(leaf_size);
        let targets: Vec<i64> = (0..100).map(|i| i * 10 + 5).collect();
        let expected: Vec<i64> = (0..100).collect();
        assert_eq!(tree.get_indexer(&targets).unwrap(), expected);

        // right bounds belong to their own interval
        let targets: Vec<i64> = (0..100).rev().map(|i| i * 10 + 10).collect();
        let expected: Vec<i64> = (0..100).rev().collect();
        assert_eq!(tree.get_indexer(&targets).unwrap(), expected);
    }
}

#[test]
fn unique_indexer_misses() {
    let tree = disjoint_tree(4);
    assert_eq!(
        tree.get_indexer(&[0, 5, -3, 1000, 1001]).unwrap(),
        vec![NO_MATCH, 0, NO_MATCH, 99, NO_MATCH]
    );
    assert!(tree.get_indexer(&[]).unwrap().is_empty());
}

#[test]
fn unique_indexer_rejects_overlap() {
    let tree: IntervalTree<f64, ClosedBoth> =
        IntervalTree::with_leaf_size(vec![0.0, 1.0, 5.0], vec![2.0, 3.0, 7.0], 1).unwrap();
    assert_eq!(tree.get_indexer(&[6.0, 0.5]).unwrap(), vec![2, 0]);
    assert_eq!(
        tree.get_indexer(&[6.0, 1.5, 0.5]),
        Err(Error::NonUniqueMatch {
            position: 1,
            matches: 2
        })
    );
}

#[test]
fn non_unique_indexer() {
    let tree = build(vec![0.0, 1.0, 5.0], vec![2.0, 3.0, 7.0], "both", 1).unwrap();
    let (mut indexer, missing) = tree.get_indexer_non_unique(&[4.0, 1.5, 6.0, 10.0]);

    assert_eq!(missing, vec![0, 3]);
    assert_eq!(indexer.len(), 5);
    assert_eq!(indexer[0], NO_MATCH);
    indexer[1..3].sort_unstable();
    assert_eq!(&indexer[1..], &[0, 1, 2, NO_MATCH]);
}

#[test]
fn non_unique_indexer_matches_query() {
    let mut rng = thread_rng();
    let left: Vec<i64> = (0..2000).map(|_| rng.gen_range(0..10000)).collect();
    let right: Vec<i64> = left.iter().map(|l| l + rng.gen_range(0..200)).collect();
    let tree = build(left, right, "neither", 16).unwrap();
    let targets: Vec<i64> = (0..1000).map(|_| rng.gen_range(-100..10300)).collect();

    let (indexer, missing) = tree.get_indexer_non_unique(&targets);

    let mut expected_indexer = Vec::new();
    let mut expected_missing = Vec::new();
    for (i, &t) in targets.iter().enumerate() {
        let hits = tree.query_point(t);
        if hits.is_empty() {
            expected_indexer.push(NO_MATCH);
            expected_missing.push(i);
        } else {
            expected_indexer.extend(hits.iter().map(|&h| h as i64));
        }
    }
    assert_eq!(indexer, expected_indexer);
    assert_eq!(missing, expected_missing);

    // a unique indexer agrees wherever it succeeds
    if let Ok(unique) = tree.get_indexer(&targets) {
        assert_eq!(unique, indexer);
    }
}

#[test]
fn get_loc() {
    let tree = build(vec![0i64, 1, 5], vec![2, 3, 7], "right", 100).unwrap();
    assert_eq!(tree.get_loc(6), Ok(vec![2]));
    assert_eq!(tree.get_loc(4), Err(Error::KeyNotFound("4".to_string())));
    assert_eq!(tree.get_loc(0).unwrap_err().to_string(), "key not found: 0");
}

#[test]
fn interval_lookup() {
    let left = vec![0.0, 2.0, 4.0, 10.0, 3.0];
    let right = vec![1.0, 3.0, 20.0, 11.0, 3.5];
    let tree = build(left, right, "right", 2).unwrap();

    // left bounds in [2, 5): 1, 4, 2; right bounds in [2, 5): 1, 4;
    // (4, 20] does not contain the midpoint 3.5
    assert_eq!(tree.get_loc_interval(2.0, 5.0), vec![1, 4, 2]);

    // only an enclosing interval
    assert_eq!(tree.get_loc_interval(12.0, 14.0), vec![2]);

    // everything, once
    let mut all = tree.get_loc_interval(-1.0, 30.0);
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3, 4]);

    assert!(tree.get_loc_interval(25.0, 30.0).is_empty());
    assert_eq!(tree.left_sorter(), &[0, 1, 4, 2, 3]);
    assert_eq!(tree.right_sorter(), &[0, 1, 4, 3, 2]);
}

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

// Integer trees must agree with float trees over the same bounds, including
// ranges whose midpoint is negative and falls between two integers.
#[test]
fn interval_lookup_integer_matches_float() {
    let mut rng = thread_rng();
    let n = 300;
    let left: Vec<i64> = (0..n).map(|_| rng.gen_range(-60..60)).collect();
    let right: Vec<i64> = left.iter().map(|l| l + rng.gen_range(0..8)).collect();
    let left_f: Vec<f64> = left.iter().map(|&x| x as f64).collect();
    let right_f: Vec<f64> = right.iter().map(|&x| x as f64).collect();

    for closed in ClosureMode::ALL {
        for leaf_size in [0, 4, 100] {
            let tree = DynIntervalTree::with_leaf_size(left.clone(), right.clone(), closed, leaf_size)
                .unwrap();
            let tree_f =
                DynIntervalTree::with_leaf_size(left_f.clone(), right_f.clone(), closed, leaf_size)
                    .unwrap();

            let mut ranges = vec![(-3, -2), (-5, 0), (-7, -7), (-1, 0), (-2, 1), (0, 0), (3, 4)];
            for _ in 0..200 {
                let a = rng.gen_range(-70..70);
                ranges.push((a, a + rng.gen_range(0..10)));
            }

            for (a, b) in ranges {
                assert_eq!(
                    sorted(tree.get_loc_interval(a, b)),
                    sorted(tree_f.get_loc_interval(a as f64, b as f64)),
                    "closed={} leaf_size={} range=({}, {})",
                    closed,
                    leaf_size,
                    a,
                    b
                );
            }
        }
    }
}
