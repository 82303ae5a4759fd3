//! NDMatrix - Generic Sparse N-Dimensional Matrix
//!
//! A container that behaves like a dense N-dimensional array but physically
//! stores only explicitly-assigned cells in an associative backing store.
//! Every other coordinate reads as a fixed default value, and assigning the
//! default value to a cell removes it from storage, so matrix size is always
//! exactly the count of interesting cells.
//!
//! ## Architecture
//!
//! NDMatrix follows a clean abstraction/implementation separation:
//!
//! - **ndmatrix-core**: coordinate keys, hashing, the backing-store
//!   capability trait, and standard store implementations (no_std)
//! - **ndmatrix**: the matrix container, index-chain cursors, value handles,
//!   and cell iteration
//!
//! ## Quick Start
//!
//! ```rust
//! use ndmatrix::SparseMatrix;
//!
//! // 2-D matrix of i32 whose absent cells read as 0, tree-backed
//! let mut m: SparseMatrix<i32, 2> = SparseMatrix::new(0);
//!
//! m.at_mut([0, 0]).assign(42);
//! assert_eq!(m.at([0, 0]).get(), 42);
//! assert_eq!(m.at([5, 7]).get(), 0); // absent cells synthesize the default
//! assert_eq!(m.len(), 1);
//!
//! // chained multi-index access is sugar over the fixed-arity path
//! assert_eq!(m.index(0).index(0).get().unwrap(), 42);
//!
//! // assigning the default erases the cell
//! m.at_mut([0, 0]).assign(0);
//! assert!(m.is_empty());
//! ```
//!
//! ## Features
//!
//! - **Generic storage**: any [`CoordStore`] works as the backing store;
//!   ordered tree maps and hash maps ship out of the box
//! - **Lazy value handles**: indexing binds a coordinate without touching
//!   the store until the handle is read or assigned
//! - **Default-value semantics**: storage stays proportional to the number
//!   of non-default cells
//! - **Serde support**: matrices round-trip as `{default, cells}` documents
//!   (feature `serde`)

// Re-export core abstractions and store implementations
pub use ndmatrix_core::{
    // Coordinate keys and hashing
    Coord, CoordBuildHasher, CoordHasher,
    // Storage abstraction
    CoordStore, TreeStore,
    // Error handling
    MatrixError, Result,
};

#[cfg(feature = "hashbrown")]
pub use ndmatrix_core::{hash_store_with_capacity, HashStore};

// Implementation modules
pub mod cell;
pub mod cursor;
pub mod iter;
pub mod matrix;
#[cfg(feature = "serde")]
mod serde_impl;

// Public exports
pub use cell::{Cell, CellMut};
pub use cursor::{Cursor, CursorMut};
pub use iter::Cells;
pub use matrix::SparseMatrix;
