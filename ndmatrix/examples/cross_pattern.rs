//! Classic sparse-matrix demo: write both diagonals of a 10x10 region into a
//! hash-backed 2-D matrix with default 0, print the central 8x8 window, then
//! dump the stored cells.
//!
//! Only the diagonal cells occupy storage; the printed zeros inside the
//! window are synthesized from the default value.

use ndmatrix::{hash_store_with_capacity, SparseMatrix};

fn main() {
    let mut matrix = SparseMatrix::with_store(0i64, hash_store_with_capacity(64));

    for i in 0..=9usize {
        matrix.at_mut([i, i]).assign(i as i64);
        matrix.at_mut([i, 9 - i]).assign((9 - i) as i64);
    }

    for row in 1..=8usize {
        for col in 1..=8usize {
            print!("{} ", matrix.at([row, col]).get());
        }
        println!();
    }

    println!("{}", matrix.len());

    for (coord, value) in &matrix {
        println!("{} {} {}", coord[0], coord[1], value);
    }
}
