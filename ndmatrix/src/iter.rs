//! Iteration over stored cells
//!
//! [`Cells`] wraps the backing store's native iterator and projects each
//! entry into a (coordinate, value) record, produced fresh per step. The
//! projection is read-only; mutation goes through the matrix operations, and
//! the borrow checker rules out mutating while an iterator is live, so
//! store-specific iterator-invalidation rules never surface.

use core::iter::FusedIterator;

use ndmatrix_core::{Coord, CoordStore};

/// Iterator over stored (coordinate, value) records in store-native order
///
/// Tree-backed matrices iterate in ascending coordinate order and support
/// double-ended traversal; hash-backed matrices iterate in bucket order.
/// Every record's value is non-default as long as writes went through the
/// default-aware path.
pub struct Cells<'a, T: 'a, const N: usize, S: CoordStore<T, N> + 'a> {
    inner: S::Iter<'a>,
}

impl<'a, T, const N: usize, S: CoordStore<T, N>> Cells<'a, T, N, S> {
    pub(crate) fn new(inner: S::Iter<'a>) -> Self {
        Self { inner }
    }
}

impl<'a, T, const N: usize, S: CoordStore<T, N>> Iterator for Cells<'a, T, N, S> {
    type Item = (Coord<N>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(coord, value)| (*coord, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, const N: usize, S: CoordStore<T, N>> DoubleEndedIterator for Cells<'a, T, N, S>
where
    S::Iter<'a>: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(coord, value)| (*coord, value))
    }
}

impl<'a, T, const N: usize, S: CoordStore<T, N>> ExactSizeIterator for Cells<'a, T, N, S> where
    S::Iter<'a>: ExactSizeIterator
{
}

impl<'a, T, const N: usize, S: CoordStore<T, N>> FusedIterator for Cells<'a, T, N, S> where
    S::Iter<'a>: FusedIterator
{
}

#[cfg(test)]
mod tests {
    use crate::matrix::SparseMatrix;
    use std::collections::BTreeSet;

    #[test]
    fn test_iteration_covers_exactly_the_stored_cells() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(42);
        matrix.at_mut([0, 0]).assign(1);
        matrix.at_mut([0, 1]).assign(2);

        let records: BTreeSet<_> = matrix
            .cells()
            .map(|(coord, value)| (coord[0], coord[1], *value))
            .collect();
        assert_eq!(records, BTreeSet::from([(0, 0, 1), (0, 1, 2)]));
        assert_eq!(matrix.cells().count(), matrix.len());
    }

    #[test]
    fn test_every_record_is_non_default() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(42);
        matrix.at_mut([0, 0]).assign(1);
        matrix.at_mut([5, 5]).assign(9);
        matrix.at_mut([0, 0]).assign(42);

        assert!(matrix.cells().all(|(_, value)| *value != 42));
        assert_eq!(matrix.cells().count(), matrix.len());
    }

    #[test]
    fn test_range_based_iteration() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(42);
        matrix.at_mut([0, 0]).assign(1);
        matrix.at_mut([0, 1]).assign(2);

        let mut values = BTreeSet::new();
        for (_, value) in &matrix {
            values.insert(*value);
        }
        assert_eq!(values, BTreeSet::from([1, 2]));
    }

    #[test]
    fn test_works_with_standard_algorithms() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(42);
        matrix.at_mut([0, 0]).assign(1);
        matrix.at_mut([0, 1]).assign(2);

        let max = matrix.cells().max_by_key(|(_, value)| **value).unwrap();
        assert_eq!(*max.1, 2);
    }

    #[test]
    fn test_tree_store_iterates_in_coordinate_order() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
        matrix.at_mut([1, 0]).assign(3);
        matrix.at_mut([0, 9]).assign(1);
        matrix.at_mut([1, 1]).assign(4);

        let coords: Vec<_> = matrix.cells().map(|(coord, _)| coord).collect();
        let mut sorted = coords.clone();
        sorted.sort();
        assert_eq!(coords, sorted);
    }

    #[test]
    fn test_tree_store_is_double_ended() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
        matrix.at_mut([0, 0]).assign(1);
        matrix.at_mut([9, 9]).assign(2);

        let mut cells = matrix.cells();
        let (last, _) = cells.next_back().unwrap();
        assert_eq!(last.components(), &[9, 9]);
        let (first, _) = cells.next().unwrap();
        assert_eq!(first.components(), &[0, 0]);
        assert!(cells.next().is_none());
    }

    #[test]
    fn test_exact_size() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
        matrix.at_mut([2, 2]).assign(5);
        matrix.at_mut([3, 3]).assign(6);

        let cells = matrix.cells();
        assert_eq!(cells.len(), 2);
    }

    #[cfg(feature = "hashbrown")]
    #[test]
    fn test_hash_store_iteration_is_complete() {
        use ndmatrix_core::HashStore;

        let mut matrix: SparseMatrix<i32, 2, HashStore<i32, 2>> = SparseMatrix::new(0);
        matrix.at_mut([0, 0]).assign(1);
        matrix.at_mut([7, 3]).assign(2);
        matrix.at_mut([3, 7]).assign(3);

        let records: BTreeSet<_> = matrix.cells().map(|(c, v)| (c, *v)).collect();
        assert_eq!(records.len(), matrix.len());
        assert!(records.iter().all(|(_, v)| *v != 0));
    }
}
