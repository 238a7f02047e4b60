//! Dynamic compressed sparse row matrix
//!
//! Rows live in two shared flat arrays (column indices and values). Each row
//! owns an ordered list of [`Segment`] handles into those arrays. Appending a
//! row reserves whole blocks up front; appending a column writes into a row's
//! partly filled block when it has one and otherwise opens a new segment at
//! the watermark. [`DcsrMatrix::defragment`] merges every row back into a single
//! segment.

mod defrag;
mod lookup;
mod storage;

use dcsr_core::{
    validate_segment_size, IncrementalMatrix, MatrixOperations, Result, Segment, SparseMatrix,
    SparseVector, DEFAULT_SEGMENT_LIST_RESERVE, DEFAULT_SEGMENT_SIZE,
};

use crate::config::MatrixConfig;

/// Sparse `f64` matrix grown one row or one column at a time
#[derive(Debug, Clone)]
pub struct DcsrMatrix {
    /// Segment list per populated row, in creation order
    rows: Vec<Vec<Segment>>,
    /// Shared column-index array
    col_indices: Vec<usize>,
    /// Shared value array
    values: Vec<f64>,
    row_capacity: usize,
    column_capacity: usize,
    column_count: usize,
    segment_size: usize,
    segment_list_reserve: usize,
    consistent: bool,
    /// Next free physical slot; always equals the shared arrays' length
    watermark: usize,
}

impl DcsrMatrix {
    /// Create an empty 0x0 matrix with the default block size
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
            row_capacity: 0,
            column_capacity: 0,
            column_count: 0,
            segment_size: DEFAULT_SEGMENT_SIZE,
            segment_list_reserve: DEFAULT_SEGMENT_LIST_RESERVE,
            consistent: true,
            watermark: 0,
        }
    }

    /// Create an empty matrix with declared row and column capacity
    pub fn with_capacity(row_capacity: usize, column_capacity: usize) -> Self {
        let mut matrix = Self::new();
        matrix.row_capacity = row_capacity;
        matrix.column_capacity = column_capacity;
        matrix
    }

    /// Create an empty matrix from a validated configuration
    pub fn from_config(config: MatrixConfig) -> Result<Self> {
        config.validate()?;

        let mut matrix = Self::with_capacity(config.row_capacity, config.column_capacity);
        matrix.segment_size = config.segment_size;
        matrix.segment_list_reserve = config.segment_list_reserve;
        Ok(matrix)
    }

    /// Number of populated rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of populated columns
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Upper bound on row indices accepted by point lookups
    pub fn row_capacity(&self) -> usize {
        self.row_capacity
    }

    /// Upper bound on column indices accepted by point lookups
    pub fn column_capacity(&self) -> usize {
        self.column_capacity
    }

    /// Number of slots per allocation block
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    /// Whether every row is stored in exactly one segment
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    /// Next free physical slot in the shared arrays
    pub fn watermark(&self) -> usize {
        self.watermark
    }

    /// Segment handles of a populated row
    pub fn segments(&self, row: usize) -> Option<&[Segment]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Raw shared column-index array, padding included
    pub fn raw_col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Raw shared value array, padding included
    pub fn raw_values(&self) -> &[f64] {
        &self.values
    }

    /// Number of live (column, value) slots across all segments
    pub fn nnz(&self) -> usize {
        self.rows.iter().flatten().map(|segment| segment.count).sum()
    }

    /// Change the block size and repack every row with it
    ///
    /// A zero size is rejected and leaves the matrix untouched.
    pub fn set_segment_size(&mut self, segment_size: usize) -> Result<()> {
        validate_segment_size(segment_size)?;

        log::debug!(
            "Changing segment size from {} to {}",
            self.segment_size,
            segment_size
        );
        self.segment_size = segment_size;
        self.defragment();
        Ok(())
    }
}

impl Default for DcsrMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl SparseMatrix for DcsrMatrix {
    fn get_element(&self, row: usize, col: usize) -> Result<f64> {
        self.get_value(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.row_capacity, self.column_capacity)
    }

    fn nnz(&self) -> usize {
        DcsrMatrix::nnz(self)
    }
}

impl MatrixOperations for DcsrMatrix {
    fn get_row(&self, row_index: usize) -> Result<SparseVector> {
        DcsrMatrix::get_row(self, row_index)
    }

    fn get_col(&self, col_index: usize) -> Result<SparseVector> {
        self.get_column(col_index)
    }
}

impl IncrementalMatrix for DcsrMatrix {
    fn append_row(&mut self, row: &SparseVector) -> usize {
        DcsrMatrix::append_row(self, row)
    }

    fn append_column(&mut self, column: &SparseVector) -> usize {
        DcsrMatrix::append_column(self, column)
    }
}
