//! Construction-time configuration for DCSR matrices

use dcsr_core::{validate_segment_size, Result, DEFAULT_SEGMENT_LIST_RESERVE, DEFAULT_SEGMENT_SIZE};

/// Configuration for a [`DcsrMatrix`](crate::DcsrMatrix)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixConfig {
    /// Number of slots per allocation block
    pub segment_size: usize,
    /// Declared row capacity
    pub row_capacity: usize,
    /// Declared column capacity
    pub column_capacity: usize,
    /// Initial capacity of each row's segment list
    pub segment_list_reserve: usize,
}

impl MatrixConfig {
    /// Create config with declared dimensions
    pub fn with_dimensions(row_capacity: usize, column_capacity: usize) -> Self {
        Self {
            row_capacity,
            column_capacity,
            ..Self::default()
        }
    }

    /// Set the allocation block size
    pub fn with_segment_size(mut self, segment_size: usize) -> Self {
        self.segment_size = segment_size;
        self
    }

    /// Set the initial capacity of each row's segment list
    pub fn with_segment_list_reserve(mut self, reserve: usize) -> Self {
        self.segment_list_reserve = reserve;
        self
    }

    /// Check that the configuration can back a matrix
    pub fn validate(&self) -> Result<()> {
        validate_segment_size(self.segment_size)
    }

    /// Pick a block size from the expected average row length
    ///
    /// Long rows get larger blocks so column appends rarely spill into new
    /// segments; very short rows keep blocks small to limit padding.
    pub fn suggested_segment_size(expected_row_len: usize) -> usize {
        if expected_row_len <= 2 {
            2
        } else {
            (expected_row_len / 2).clamp(DEFAULT_SEGMENT_SIZE, 64)
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
            row_capacity: 0,
            column_capacity: 0,
            segment_list_reserve: DEFAULT_SEGMENT_LIST_RESERVE,
        }
    }
}
