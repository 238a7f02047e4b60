//! Validation utilities for DCSR access and configuration
//!
//! Pure checks with no storage access. Each returns the error the matrix
//! reports to its caller, so lookups can validate before touching any state.

pub mod arguments;
pub mod bounds;

pub use arguments::validate_segment_size;
pub use bounds::{check_column_index, check_column_limit, check_row_index, check_row_limit};
