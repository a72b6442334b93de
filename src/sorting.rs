// Array helpers used while building nodes and answering range queries.

use std::cmp::Ordering;

/// Gather `source[i]` for every `i` in `subset`, in order.
#[inline]
pub fn take<T: Copy>(source: &[T], subset: &[usize]) -> Vec<T> {
    subset.iter().map(|&i| source[i]).collect()
}

/// Permutation that puts `values` in ascending order. Ties keep their input
/// order; unordered values (NaN) compare equal to everything.
pub fn argsort<K: PartialOrd>(values: &[K]) -> Vec<usize> {
    let mut sorter: Vec<usize> = (0..values.len()).collect();
    sorter.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });
    sorter
}

/// Restrict `all_values` and `all_indices` to `subset`, then sort both by
/// value.
pub fn sort_values_and_indices<K>(
    all_values: &[K],
    all_indices: &[usize],
    subset: &[usize],
) -> (Vec<K>, Vec<usize>)
where
    K: Copy + PartialOrd,
{
    let indices = take(all_indices, subset);
    let values = take(all_values, subset);
    let sorter = argsort(&values);
    (take(&values, &sorter), take(&indices, &sorter))
}

/// Leftmost insertion point for `key` into `values` viewed through
/// `sorter`: the number of sorted values strictly less than `key`.
pub fn search_sorted<K: PartialOrd>(values: &[K], sorter: &[usize], key: K) -> usize {
    sorter.partition_point(|&i| values[i] < key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_preserves_subset_order() {
        let values = [10, 20, 30, 40];
        assert_eq!(take(&values, &[3, 0, 2]), vec![40, 10, 30]);
        assert!(take(&values, &[]).is_empty());
    }

    #[test]
    fn argsort_is_stable() {
        let values = [3.0, 1.0, 2.0, 1.0];
        assert_eq!(argsort(&values), vec![1, 3, 2, 0]);
    }

    #[test]
    fn sort_subset() {
        let values = [5, 9, 1, 7];
        let indices = [100, 101, 102, 103];
        let (v, i) = sort_values_and_indices(&values, &indices, &[0, 1, 3]);
        assert_eq!(v, vec![5, 7, 9]);
        assert_eq!(i, vec![100, 103, 101]);
    }

    #[test]
    fn search_sorted_lower_bound() {
        let values = [4, 1, 3, 3];
        let sorter = argsort(&values);
        assert_eq!(search_sorted(&values, &sorter, 0), 0);
        assert_eq!(search_sorted(&values, &sorter, 3), 1);
        assert_eq!(search_sorted(&values, &sorter, 4), 3);
        assert_eq!(search_sorted(&values, &sorter, 5), 4);
    }
}
