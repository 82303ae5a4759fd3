//! Backing-store capability trait and standard map implementations
//!
//! A sparse matrix is generic over the associative container holding its
//! non-default cells. This module names the capability set the matrix
//! requires and implements it for the standard ordered tree map and for
//! `hashbrown`'s hash map.

use crate::coord::Coord;

#[cfg(feature = "alloc")]
use alloc::collections::{btree_map, BTreeMap};

#[cfg(feature = "hashbrown")]
use crate::coord::CoordBuildHasher;

/// Capability contract for associative containers backing a sparse matrix
///
/// Insert-or-overwrite, lookup, erase, size, and full traversal in the
/// store's native order. The matrix imposes no ordering of its own: an
/// ordered store iterates in key order, a hash store in whatever order its
/// buckets produce.
pub trait CoordStore<T, const N: usize> {
    /// Iterator over stored entries in the store's native order
    type Iter<'a>: Iterator<Item = (&'a Coord<N>, &'a T)>
    where
        Self: 'a,
        T: 'a;

    /// Insert or overwrite the entry at `key`, returning the previous value
    fn insert(&mut self, key: Coord<N>, value: T) -> Option<T>;

    /// Look up the entry at `key`
    fn get(&self, key: &Coord<N>) -> Option<&T>;

    /// Remove the entry at `key`, returning it if it was present
    fn remove(&mut self, key: &Coord<N>) -> Option<T>;

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Whether no entries are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Traverse all stored entries
    fn iter(&self) -> Self::Iter<'_>;
}

/// Ordered tree-map store; iterates in ascending coordinate order
#[cfg(feature = "alloc")]
pub type TreeStore<T, const N: usize> = BTreeMap<Coord<N>, T>;

#[cfg(feature = "alloc")]
impl<T, const N: usize> CoordStore<T, N> for BTreeMap<Coord<N>, T> {
    type Iter<'a>
        = btree_map::Iter<'a, Coord<N>, T>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, key: Coord<N>, value: T) -> Option<T> {
        BTreeMap::insert(self, key, value)
    }

    fn get(&self, key: &Coord<N>) -> Option<&T> {
        BTreeMap::get(self, key)
    }

    fn remove(&mut self, key: &Coord<N>) -> Option<T> {
        BTreeMap::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}

/// Hash-map store keyed with the FNV-1a coordinate hasher
#[cfg(feature = "hashbrown")]
pub type HashStore<T, const N: usize> = hashbrown::HashMap<Coord<N>, T, CoordBuildHasher>;

/// Create a [`HashStore`] with preallocated capacity
///
/// The construction-forwarding path for callers that know the number of
/// non-default cells up front.
#[cfg(feature = "hashbrown")]
pub fn hash_store_with_capacity<T, const N: usize>(capacity: usize) -> HashStore<T, N> {
    HashStore::with_capacity_and_hasher(capacity, CoordBuildHasher::default())
}

#[cfg(feature = "hashbrown")]
impl<T, const N: usize, H> CoordStore<T, N> for hashbrown::HashMap<Coord<N>, T, H>
where
    H: core::hash::BuildHasher,
{
    type Iter<'a>
        = hashbrown::hash_map::Iter<'a, Coord<N>, T>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, key: Coord<N>, value: T) -> Option<T> {
        hashbrown::HashMap::insert(self, key, value)
    }

    fn get(&self, key: &Coord<N>) -> Option<&T> {
        hashbrown::HashMap::get(self, key)
    }

    fn remove(&mut self, key: &Coord<N>) -> Option<T> {
        hashbrown::HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        hashbrown::HashMap::iter(self)
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tree_tests {
    use super::*;

    #[test]
    fn test_tree_store_capabilities() {
        let mut store: TreeStore<i32, 2> = TreeStore::new();
        assert!(CoordStore::is_empty(&store));

        assert_eq!(CoordStore::insert(&mut store, Coord::new([0, 1]), 5), None);
        assert_eq!(
            CoordStore::insert(&mut store, Coord::new([0, 1]), 6),
            Some(5)
        );
        assert_eq!(CoordStore::get(&store, &Coord::new([0, 1])), Some(&6));
        assert_eq!(CoordStore::len(&store), 1);

        assert_eq!(CoordStore::remove(&mut store, &Coord::new([0, 1])), Some(6));
        assert_eq!(CoordStore::remove(&mut store, &Coord::new([0, 1])), None);
        assert!(CoordStore::is_empty(&store));
    }

    #[test]
    fn test_tree_store_iterates_in_key_order() {
        let mut store: TreeStore<i32, 2> = TreeStore::new();
        CoordStore::insert(&mut store, Coord::new([1, 0]), 10);
        CoordStore::insert(&mut store, Coord::new([0, 2]), 2);

        let mut entries = CoordStore::iter(&store);
        assert_eq!(entries.next(), Some((&Coord::new([0, 2]), &2)));
        assert_eq!(entries.next(), Some((&Coord::new([1, 0]), &10)));
        assert_eq!(entries.next(), None);
    }
}

#[cfg(all(test, feature = "hashbrown"))]
mod hash_tests {
    use super::*;

    #[test]
    fn test_hash_store_capabilities() {
        let mut store: HashStore<i32, 3> = hash_store_with_capacity(16);
        assert!(store.capacity() >= 16);

        CoordStore::insert(&mut store, Coord::new([0, 1, 2]), 7);
        assert_eq!(CoordStore::get(&store, &Coord::new([0, 1, 2])), Some(&7));
        assert_eq!(CoordStore::get(&store, &Coord::new([2, 1, 0])), None);
        assert_eq!(CoordStore::len(&store), 1);

        assert_eq!(
            CoordStore::remove(&mut store, &Coord::new([0, 1, 2])),
            Some(7)
        );
        assert!(CoordStore::is_empty(&store));
    }
}
