//! Lazy value handles bound to one coordinate
//!
//! A handle pairs a matrix reference with one full coordinate and defers the
//! actual store access until it is read or assigned. Handles cache nothing:
//! every read consults the backing store, so handles bound to the same
//! coordinate always observe the latest state. Lifetimes tie every handle to
//! its matrix borrow, so use-after-destruction is a compile error rather than
//! a runtime hazard.

use core::fmt;

use ndmatrix_core::{Coord, CoordStore};

use crate::matrix::SparseMatrix;

/// Read-only value handle
///
/// Produced by [`SparseMatrix::at`] and by completed read cursors. Copying a
/// handle copies the (matrix, coordinate) binding, not the value.
pub struct Cell<'m, T, const N: usize, S> {
    matrix: &'m SparseMatrix<T, N, S>,
    coord: Coord<N>,
}

impl<T, const N: usize, S> Clone for Cell<'_, T, N, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, S> Copy for Cell<'_, T, N, S> {}

impl<'m, T, const N: usize, S> Cell<'m, T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    pub(crate) fn new(matrix: &'m SparseMatrix<T, N, S>, coord: Coord<N>) -> Self {
        Self { matrix, coord }
    }

    /// The coordinate this handle is bound to
    pub fn coord(&self) -> Coord<N> {
        self.coord
    }

    /// Resolve the read: the stored value, or a clone of the default when
    /// the cell is absent
    pub fn get(&self) -> T {
        self.matrix.get_or_default(self.coord)
    }

    /// Whether the cell is absent from storage (reads as the default)
    pub fn is_default(&self) -> bool {
        self.matrix.get(self.coord).is_none()
    }
}

impl<T, const N: usize, S> PartialEq<T> for Cell<'_, T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T, const N: usize, S> PartialEq for Cell<'_, T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T, const N: usize, S> fmt::Debug for Cell<'_, T, N, S>
where
    T: Clone + PartialEq + fmt::Debug,
    S: CoordStore<T, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("coord", &self.coord)
            .field("value", &self.get())
            .finish()
    }
}

/// Read-write value handle
///
/// Produced by [`SparseMatrix::at_mut`] and by completed write cursors. The
/// exclusive borrow means writes through one handle cannot race reads through
/// another; a later handle bound to the same coordinate observes the write.
pub struct CellMut<'m, T, const N: usize, S> {
    matrix: &'m mut SparseMatrix<T, N, S>,
    coord: Coord<N>,
}

impl<'m, T, const N: usize, S> CellMut<'m, T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    pub(crate) fn new(matrix: &'m mut SparseMatrix<T, N, S>, coord: Coord<N>) -> Self {
        Self { matrix, coord }
    }

    /// The coordinate this handle is bound to
    pub fn coord(&self) -> Coord<N> {
        self.coord
    }

    /// Resolve the read: the stored value, or a clone of the default when
    /// the cell is absent
    pub fn get(&self) -> T {
        self.matrix.get_or_default(self.coord)
    }

    /// Default-aware write: assigning the default value erases the cell,
    /// anything else is stored
    pub fn assign(&mut self, value: T) {
        self.matrix.assign(value, self.coord);
    }

    /// Erase the cell, equivalent to assigning the default value
    pub fn clear(&mut self) {
        self.matrix.erase(self.coord);
    }

    /// Downgrade into a read-only handle at the same coordinate
    pub fn into_ref(self) -> Cell<'m, T, N, S> {
        Cell::new(self.matrix, self.coord)
    }
}

impl<T, const N: usize, S> PartialEq<T> for CellMut<'_, T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T, const N: usize, S> fmt::Debug for CellMut<'_, T, N, S>
where
    T: Clone + PartialEq + fmt::Debug,
    S: CoordStore<T, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellMut")
            .field("coord", &self.coord)
            .field("value", &self.get())
            .finish()
    }
}
