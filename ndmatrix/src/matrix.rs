//! The sparse matrix container
//!
//! A [`SparseMatrix`] owns one backing store and a default value. Only cells
//! whose value differs from the default are physically stored; every other
//! coordinate reads as the default, and the default-aware write path erases a
//! cell instead of storing the default into it. Matrix size is therefore
//! exactly the count of interesting cells, which is what makes very
//! high-dimensional or very sparse data feasible.

use ndmatrix_core::{Coord, CoordStore, TreeStore};

use crate::cell::{Cell, CellMut};
use crate::cursor::{Cursor, CursorMut};
use crate::iter::Cells;

/// Sparse N-dimensional matrix over a generic associative backing store
///
/// `T` is the element type, `N` the dimensionality, and `S` any store
/// implementing [`CoordStore`]. The default store is the ordered
/// [`TreeStore`]; hash-backed matrices are built by forwarding a
/// preconfigured store through [`SparseMatrix::with_store`].
///
/// ```
/// use ndmatrix::SparseMatrix;
///
/// let mut m: SparseMatrix<i32, 2> = SparseMatrix::new(42);
/// assert_eq!(m.at([0, 0]).get(), 42);
///
/// m.at_mut([0, 0]).assign(1);
/// assert_eq!(m.len(), 1);
///
/// // assigning the default erases the cell
/// m.at_mut([0, 0]).assign(42);
/// assert!(m.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SparseMatrix<T, const N: usize, S = TreeStore<T, N>> {
    store: S,
    default: T,
}

impl<T, const N: usize, S> SparseMatrix<T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    /// Create an empty matrix whose absent cells read as `default`
    pub fn new(default: T) -> Self
    where
        S: Default,
    {
        Self {
            store: S::default(),
            default,
        }
    }

    /// Create a matrix around a preconfigured store
    ///
    /// The store is adopted verbatim, so store-specific construction knobs
    /// (preallocated hash capacity, custom hashers) are available without the
    /// matrix knowing about them:
    ///
    /// ```
    /// use ndmatrix::{hash_store_with_capacity, SparseMatrix};
    ///
    /// let mut m = SparseMatrix::with_store(0, hash_store_with_capacity::<i32, 2>(2048));
    /// m.at_mut([0, 2]).assign(42);
    /// assert_eq!(m.len(), 1);
    /// ```
    pub fn with_store(default: T, store: S) -> Self {
        Self { store, default }
    }

    /// The value absent cells read as
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of stored (non-default) cells
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no cells are stored
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Stored value at `coord`, or `None` when the cell is absent
    pub fn get(&self, coord: impl Into<Coord<N>>) -> Option<&T> {
        self.store.get(&coord.into())
    }

    /// Stored value at `coord`, or a clone of the default when absent
    ///
    /// Never modifies storage: reading an absent cell synthesizes the default
    /// without allocating an entry.
    pub fn get_or_default(&self, coord: impl Into<Coord<N>>) -> T {
        self.get(coord)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Unconditionally insert-or-overwrite the cell at `coord`
    ///
    /// Low-level primitive: stores `value` even when it equals the default.
    /// Writes that must uphold the no-default-entries invariant go through
    /// [`assign`](Self::assign) or a [`CellMut`] handle instead.
    pub fn set(&mut self, value: T, coord: impl Into<Coord<N>>) {
        self.store.insert(coord.into(), value);
    }

    /// Default-aware write: erases the cell when `value` equals the default,
    /// stores it otherwise
    pub fn assign(&mut self, value: T, coord: impl Into<Coord<N>>) {
        let coord = coord.into();
        if value == self.default {
            self.store.remove(&coord);
        } else {
            self.store.insert(coord, value);
        }
    }

    /// Remove the cell at `coord`, returning its value if it was present
    ///
    /// Erasing an absent cell is a no-op.
    pub fn erase(&mut self, coord: impl Into<Coord<N>>) -> Option<T> {
        self.store.remove(&coord.into())
    }

    /// Read-only value handle bound to `coord`
    ///
    /// The full-coordinate access path; arity is checked by the `[usize; N]`
    /// signature at compile time.
    pub fn at(&self, coord: impl Into<Coord<N>>) -> Cell<'_, T, N, S> {
        Cell::new(self, coord.into())
    }

    /// Read-write value handle bound to `coord`
    pub fn at_mut(&mut self, coord: impl Into<Coord<N>>) -> CellMut<'_, T, N, S> {
        CellMut::new(self, coord.into())
    }

    /// Begin a chained multi-index read with the first coordinate component
    ///
    /// Each further [`Cursor::index`] call appends one component; no store
    /// access happens until the completed cursor is resolved.
    pub fn index(&self, first: usize) -> Cursor<'_, T, N, S> {
        Cursor::new(self, first)
    }

    /// Begin a chained multi-index write with the first coordinate component
    pub fn index_mut(&mut self, first: usize) -> CursorMut<'_, T, N, S> {
        CursorMut::new(self, first)
    }

    /// Iterate stored cells in the backing store's native order
    pub fn cells(&self) -> Cells<'_, T, N, S> {
        Cells::new(self.store.iter())
    }

    /// Read access to the backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<'a, T, const N: usize, S> IntoIterator for &'a SparseMatrix<T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    type Item = (Coord<N>, &'a T);
    type IntoIter = Cells<'a, T, N, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

impl<T, const N: usize, S> Default for SparseMatrix<T, N, S>
where
    T: Clone + PartialEq + Default,
    S: CoordStore<T, N> + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
