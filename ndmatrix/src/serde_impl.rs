//! Serde support for whole matrices
//!
//! A matrix serializes as its default value plus the list of stored cells.
//! Deserialization routes every cell through the default-aware write path, so
//! a hand-edited document that lists default-valued cells collapses back to
//! empty storage and the no-default-entries invariant holds.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use ndmatrix_core::{Coord, CoordStore};

use crate::matrix::SparseMatrix;

#[derive(serde::Serialize)]
struct MatrixRepr<'a, T, const N: usize> {
    default: &'a T,
    cells: Vec<(Coord<N>, &'a T)>,
}

#[derive(serde::Deserialize)]
#[serde(bound = "T: Deserialize<'de>")]
struct MatrixReprOwned<T, const N: usize> {
    default: T,
    cells: Vec<(Coord<N>, T)>,
}

impl<T, const N: usize, S> Serialize for SparseMatrix<T, N, S>
where
    T: Clone + PartialEq + Serialize,
    S: CoordStore<T, N>,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let repr = MatrixRepr {
            default: self.default_value(),
            cells: self.cells().collect(),
        };
        repr.serialize(serializer)
    }
}

impl<'de, T, const N: usize, S> Deserialize<'de> for SparseMatrix<T, N, S>
where
    T: Clone + PartialEq + Deserialize<'de>,
    S: CoordStore<T, N> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = MatrixReprOwned::<T, N>::deserialize(deserializer)?;
        let mut matrix = SparseMatrix::new(repr.default);
        for (coord, value) in repr.cells {
            matrix.assign(value, coord);
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(42);
        matrix.at_mut([0, 0]).assign(1);
        matrix.at_mut([5, 7]).assign(9);

        let json = serde_json::to_string(&matrix).unwrap();
        let restored: SparseMatrix<i32, 2> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(*restored.default_value(), 42);
        assert_eq!(restored.at([0, 0]).get(), 1);
        assert_eq!(restored.at([5, 7]).get(), 9);
        assert_eq!(restored.at([1, 1]).get(), 42);
    }

    #[test]
    fn test_default_cells_are_dropped_on_deserialize() {
        let json = r#"{"default":42,"cells":[[[0,0],1],[[2,2],42]]}"#;
        let matrix: SparseMatrix<i32, 2> = serde_json::from_str(json).unwrap();

        // the default-valued cell in the document is not stored
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.at([0, 0]).get(), 1);
        assert_eq!(matrix.at([2, 2]).get(), 42);
    }

    #[test]
    fn test_wrong_coordinate_arity_is_rejected() {
        let json = r#"{"default":0,"cells":[[[0,0,0],1]]}"#;
        let result: Result<SparseMatrix<i32, 2>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_form_never_contains_defaults() {
        let mut matrix: SparseMatrix<i32, 2> = SparseMatrix::new(0);
        matrix.at_mut([1, 1]).assign(5);
        matrix.at_mut([1, 1]).assign(0);

        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, r#"{"default":0,"cells":[]}"#);
    }
}
