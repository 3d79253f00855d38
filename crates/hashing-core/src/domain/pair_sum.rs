//! Pair-sum lookup (problem 1)
//!
//! This module provides the single-pass complement lookup and the pairwise
//! reference scan it replaces.

use crate::domain::lookup::{IndexMap, index_map_with_capacity};

/// Find two positions whose values add up to `target`
///
/// Scans left to right keeping a map from each value seen so far to the first
/// index it appeared at. At position `j` the complement `target - values[j]`
/// is looked up; on a hit the pair `(map[complement], j)` is returned.
///
/// When several pairs exist, the one with the smallest second index is
/// returned, paired with the earliest position holding its complement.
///
/// # Returns
/// `Some((i, j))` with `i < j` and `values[i] + values[j] == target`,
/// or `None` if no such pair exists
pub fn two_sum(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut first_index: IndexMap<i64, usize> = index_map_with_capacity(values.len());

    for (j, &value) in values.iter().enumerate() {
        // An overflowing complement lies outside i64 and cannot be present
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&i) = first_index.get(&complement) {
                return Some((i, j));
            }
        }
        first_index.entry(value).or_insert(j);
    }

    None
}

/// Find a pair summing to `target` by checking every pair
///
/// O(n²) reference for [`two_sum`]. Pairs are visited in order of their
/// second index, then their first index, so both functions agree on which
/// pair is returned.
pub fn two_sum_pairwise(values: &[i64], target: i64) -> Option<(usize, usize)> {
    for j in 1..values.len() {
        for i in 0..j {
            if values[i].checked_add(values[j]) == Some(target) {
                return Some((i, j));
            }
        }
    }

    None
}
