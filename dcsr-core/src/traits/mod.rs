//! Abstract interfaces for DCSR matrices
//!
//! Traits are pure interfaces - the concrete matrix lives in the `dcsr` crate.

pub mod matrix;

pub use matrix::SparseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::{IncrementalMatrix, MatrixOperations};
