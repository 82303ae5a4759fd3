//! Dimension-counting cursors for chained multi-index access
//!
//! A cursor accumulates one coordinate component per [`Cursor::index`] call
//! without touching the backing store; completing the chain yields a value
//! handle. The fixed-arity [`SparseMatrix::at`] path checks arity at compile
//! time and is the primary access route; cursors are the chained-syntax
//! equivalent for call sites that discover components one dimension at a
//! time:
//!
//! ```
//! use ndmatrix::SparseMatrix;
//!
//! let mut m: SparseMatrix<i32, 3> = SparseMatrix::new(0);
//! m.index_mut(0).index(1).index(2).assign(222)?;
//! assert_eq!(m.index(0).index(1).index(2).get()?, 222);
//! # Ok::<(), ndmatrix::MatrixError>(())
//! ```

use ndmatrix_core::{CoordStore, MatrixError, Result};

use crate::cell::{Cell, CellMut};
use crate::matrix::SparseMatrix;

/// Read-only index-chain cursor
///
/// Created by [`SparseMatrix::index`]. Small and stack-local; it never
/// outlives the indexing expression it appears in.
pub struct Cursor<'m, T, const N: usize, S> {
    matrix: &'m SparseMatrix<T, N, S>,
    components: [usize; N],
    filled: usize,
}

impl<'m, T, const N: usize, S> Cursor<'m, T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    pub(crate) fn new(matrix: &'m SparseMatrix<T, N, S>, first: usize) -> Self {
        let mut cursor = Self {
            matrix,
            components: [0; N],
            filled: 0,
        };
        cursor.push(first);
        cursor
    }

    fn push(&mut self, component: usize) {
        assert!(
            self.filled < N,
            "coordinate already has {} components",
            N
        );
        self.components[self.filled] = component;
        self.filled += 1;
    }

    /// Append the next coordinate component
    ///
    /// # Panics
    ///
    /// Panics when more than `N` components are supplied. Over-indexing is a
    /// contract violation at the offending call, not a recoverable condition.
    pub fn index(mut self, component: usize) -> Self {
        self.push(component);
        self
    }

    /// Number of components still required to complete the coordinate
    pub fn remaining(&self) -> usize {
        N - self.filled
    }

    /// Complete the chain into a read-only value handle
    ///
    /// Fails with [`MatrixError::ArityMismatch`] when fewer than `N`
    /// components have been supplied.
    pub fn cell(self) -> Result<Cell<'m, T, N, S>> {
        if self.filled == N {
            Ok(self.matrix.at(self.components))
        } else {
            Err(MatrixError::ArityMismatch {
                expected: N,
                supplied: self.filled,
            })
        }
    }

    /// Complete the chain and resolve the read in one step
    pub fn get(self) -> Result<T> {
        self.cell().map(|cell| cell.get())
    }
}

/// Read-write index-chain cursor
///
/// Created by [`SparseMatrix::index_mut`]. Identical to [`Cursor`] except
/// that completing it yields a writable handle.
pub struct CursorMut<'m, T, const N: usize, S> {
    matrix: &'m mut SparseMatrix<T, N, S>,
    components: [usize; N],
    filled: usize,
}

impl<'m, T, const N: usize, S> CursorMut<'m, T, N, S>
where
    T: Clone + PartialEq,
    S: CoordStore<T, N>,
{
    pub(crate) fn new(matrix: &'m mut SparseMatrix<T, N, S>, first: usize) -> Self {
        let mut cursor = Self {
            matrix,
            components: [0; N],
            filled: 0,
        };
        cursor.push(first);
        cursor
    }

    fn push(&mut self, component: usize) {
        assert!(
            self.filled < N,
            "coordinate already has {} components",
            N
        );
        self.components[self.filled] = component;
        self.filled += 1;
    }

    /// Append the next coordinate component
    ///
    /// # Panics
    ///
    /// Panics when more than `N` components are supplied.
    pub fn index(mut self, component: usize) -> Self {
        self.push(component);
        self
    }

    /// Number of components still required to complete the coordinate
    pub fn remaining(&self) -> usize {
        N - self.filled
    }

    /// Complete the chain into a writable value handle
    ///
    /// Fails with [`MatrixError::ArityMismatch`] when fewer than `N`
    /// components have been supplied.
    pub fn cell(self) -> Result<CellMut<'m, T, N, S>> {
        if self.filled == N {
            Ok(self.matrix.at_mut(self.components))
        } else {
            Err(MatrixError::ArityMismatch {
                expected: N,
                supplied: self.filled,
            })
        }
    }

    /// Complete the chain and perform a default-aware write in one step
    pub fn assign(self, value: T) -> Result<()> {
        self.cell().map(|mut cell| cell.assign(value))
    }

    /// Complete the chain and resolve the read in one step
    pub fn get(self) -> Result<T> {
        self.cell().map(|cell| cell.get())
    }
}
