//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
///
/// The taxonomy is deliberately narrow: reading an absent cell resolves to
/// the matrix default value and erasing an absent cell is a no-op, so neither
/// is an error. The one genuine error class is supplying the wrong number of
/// coordinate components for the matrix dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Wrong number of coordinate components for the matrix dimensionality
    ArityMismatch {
        /// Dimensionality of the matrix
        expected: usize,
        /// Number of components actually supplied
        supplied: usize,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::ArityMismatch { expected, supplied } => {
                write!(
                    f,
                    "expected {expected} coordinate components, got {supplied}"
                )
            }
        }
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
