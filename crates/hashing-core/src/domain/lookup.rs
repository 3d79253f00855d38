//! Auxiliary lookup structures
//!
//! Every routine in the domain layer builds one of these per call and drops it
//! on return. With the `fx-hash` feature (default) they use the Fx hash from
//! `rustc-hash`; without it they fall back to the std SipHash containers.

#[cfg(feature = "fx-hash")]
mod imp {
    /// Set of values already seen during a scan
    pub type SeenSet<T> = rustc_hash::FxHashSet<T>;

    /// Mapping from a value to data recorded about it (index, count)
    pub type IndexMap<K, V> = rustc_hash::FxHashMap<K, V>;

    pub(super) type Builder = rustc_hash::FxBuildHasher;
}

#[cfg(not(feature = "fx-hash"))]
mod imp {
    /// Set of values already seen during a scan
    pub type SeenSet<T> = std::collections::HashSet<T>;

    /// Mapping from a value to data recorded about it (index, count)
    pub type IndexMap<K, V> = std::collections::HashMap<K, V>;

    pub(super) type Builder = std::collections::hash_map::RandomState;
}

pub use imp::{IndexMap, SeenSet};

/// Create an empty [`SeenSet`] able to hold `capacity` values without rehashing
#[inline]
pub fn seen_set_with_capacity<T>(capacity: usize) -> SeenSet<T> {
    SeenSet::with_capacity_and_hasher(capacity, imp::Builder::default())
}

/// Create an empty [`IndexMap`] able to hold `capacity` entries without rehashing
#[inline]
pub fn index_map_with_capacity<K, V>(capacity: usize) -> IndexMap<K, V> {
    IndexMap::with_capacity_and_hasher(capacity, imp::Builder::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seen_set_with_capacity_is_empty() {
        let set: SeenSet<i64> = seen_set_with_capacity(16);
        assert!(set.is_empty());
        assert!(set.capacity() >= 16);
    }

    #[test]
    fn test_index_map_with_capacity_is_empty() {
        let map: IndexMap<i64, usize> = index_map_with_capacity(8);
        assert!(map.is_empty());
        assert!(map.capacity() >= 8);
    }

    #[test]
    fn test_zero_capacity() {
        let mut set: SeenSet<char> = seen_set_with_capacity(0);
        assert!(set.insert('a'));
        assert!(!set.insert('a'));
    }
}
