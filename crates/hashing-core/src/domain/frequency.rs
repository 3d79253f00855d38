//! Frequency profile
//!
//! Multiset of elements backed by an [`IndexMap`] from element to count.
//! Zero counts are never stored, so an exhausted profile is simply empty.

use crate::domain::lookup::{IndexMap, index_map_with_capacity};
use std::hash::Hash;

/// Mapping from each distinct element to the number of its occurrences
#[derive(Clone, Debug)]
pub struct FrequencyProfile<T> {
    counts: IndexMap<T, usize>,
}

impl<T: Eq + Hash> FrequencyProfile<T> {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty profile sized for `capacity` distinct elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: index_map_with_capacity(capacity),
        }
    }

    /// Record one occurrence of `element`
    #[inline]
    pub fn add(&mut self, element: T) {
        *self.counts.entry(element).or_insert(0) += 1;
    }

    /// Consume one occurrence of `element`
    ///
    /// Returns `false` if the element is absent or already exhausted; the
    /// profile is left unchanged in that case.
    #[inline]
    pub fn take(&mut self, element: &T) -> bool {
        let Some(count) = self.counts.get_mut(element) else {
            return false;
        };

        *count -= 1;
        if *count == 0 {
            self.counts.remove(element);
        }
        true
    }

    /// Number of remaining occurrences of `element`
    pub fn count(&self, element: &T) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Number of distinct elements with a non-zero count
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of remaining occurrences
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// True once every count has reached zero
    pub fn is_exhausted(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<T: Eq + Hash> Default for FrequencyProfile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for FrequencyProfile<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for FrequencyProfile<T> {}

impl<T: Eq + Hash> FromIterator<T> for FrequencyProfile<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut profile = Self::with_capacity(iter.size_hint().0);
        for element in iter {
            profile.add(element);
        }
        profile
    }
}

impl<T: Eq + Hash> Extend<T> for FrequencyProfile<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}
