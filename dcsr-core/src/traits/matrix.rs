//! Core matrix abstraction traits
//!
//! These traits describe what the modeling layer may ask of a coefficient
//! matrix. Whole rows and columns only ever cross them as
//! [`SparseVector`](crate::SparseVector) values.

use crate::error::Result;
#[cfg(feature = "alloc")]
use crate::sparse_vector::SparseVector;

/// Point access to a sparse matrix of `f64` coefficients
pub trait SparseMatrix {
    /// Get the value at the specified position
    ///
    /// Positions inside the matrix bounds that hold no value read as 0.0.
    /// Positions outside the bounds are an error.
    fn get_element(&self, row: usize, col: usize) -> Result<f64>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored elements
    fn nnz(&self) -> usize;
}

/// Whole row/column extraction (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored elements of a row, keyed by column
    fn get_row(&self, row_index: usize) -> Result<SparseVector>;

    /// Get all stored elements of a column, keyed by row
    fn get_col(&self, col_index: usize) -> Result<SparseVector>;
}

/// Matrices grown one whole row or one whole column at a time
#[cfg(feature = "alloc")]
pub trait IncrementalMatrix: MatrixOperations {
    /// Append `row` after the last row and return its index
    fn append_row(&mut self, row: &SparseVector) -> usize;

    /// Append `column` after the last column and return its index
    ///
    /// Rows referenced by `column` that do not exist yet are created empty.
    fn append_column(&mut self, column: &SparseVector) -> usize;
}
