//! Duplicate detection (problem 217)
//!
//! Single left-to-right scan over a [`SeenSet`], stopping at the first value
//! that is already present.

use crate::domain::lookup::{SeenSet, seen_set_with_capacity};
use std::hash::Hash;

/// Check whether any value appears more than once
///
/// Empty and single-element inputs never contain duplicates.
pub fn has_duplicate<T: Eq + Hash>(values: &[T]) -> bool {
    first_duplicate(values).is_some()
}

/// Find the position of the first repeated value
///
/// Returns the index of the earliest element whose value already occurred at
/// a smaller index, or `None` if all values are distinct.
pub fn first_duplicate<T: Eq + Hash>(values: &[T]) -> Option<usize> {
    if values.len() < 2 {
        return None;
    }

    let mut seen: SeenSet<&T> = seen_set_with_capacity(values.len());
    values.iter().position(|value| !seen.insert(value))
}

/// Closed-form duplicate check
///
/// Builds the full set and compares its size with the input length. No early
/// exit; kept as a reference for tests and benchmarks.
pub fn has_duplicate_by_len<T: Eq + Hash>(values: &[T]) -> bool {
    values.iter().collect::<SeenSet<&T>>().len() != values.len()
}
