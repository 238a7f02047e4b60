//! DCSR - Dynamic Compressed Sparse Row matrix
//!
//! In-memory storage for sparse coefficient matrices that grow one row or one
//! column at a time without knowing their final size.
//!
//! ## Architecture
//!
//! - **dcsr-core**: layout arithmetic, validation, error type, traits and the
//!   `SparseVector` interchange type (no_std)
//! - **dcsr**: the matrix itself, its configuration and diagnostics
//!
//! ## Quick Start
//!
//! ```rust
//! use dcsr::{DcsrMatrix, SparseVector};
//!
//! fn example() -> dcsr::Result<()> {
//!     let mut matrix = DcsrMatrix::new();
//!
//!     let row: SparseVector = [(0, 1.0), (2, 4.0)].into_iter().collect();
//!     matrix.append_row(&row);
//!
//!     let column: SparseVector = [(0, 2.5), (1, -1.0)].into_iter().collect();
//!     let col = matrix.append_column(&column);
//!
//!     assert_eq!(matrix.get_value(1, col)?, -1.0);
//!
//!     // Merge rows split over several segments
//!     matrix.defragment();
//!     assert!(matrix.is_consistent());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Lazy column appends**: values fill partly used blocks in place
//! - **Explicit compaction**: `defragment` rebuilds one segment per row
//! - **Diagnostics**: layout dump and fragmentation statistics
//! - **serde**: derive support for the vector, segment and config types

// Re-export core abstractions
pub use dcsr_core::{
    // Core traits
    IncrementalMatrix, MatrixOperations, SparseMatrix,
    // Interchange and layout types
    Segment, SparseVector, ZERO_TOLERANCE,
    // Error handling
    Axis, DcsrError, Result,
};

// Implementation modules
pub mod config;
pub mod dump;
pub mod matrix;

// Public exports
pub use config::MatrixConfig;
pub use dump::{FragmentationStats, MatrixDump};
pub use matrix::DcsrMatrix;
