//! Point, row and column lookup

use dcsr_core::{
    check_column_index, check_column_limit, check_row_index, check_row_limit, Result,
    SparseVector,
};

use super::DcsrMatrix;

impl DcsrMatrix {
    /// Get the value at (`row`, `col`)
    ///
    /// Both indices are checked against the capacities. Positions that hold
    /// no value, including rows declared but not yet populated, read as 0.0.
    /// Every segment of the row is scanned, so lookups stay correct without
    /// defragmentation and only get faster after it.
    pub fn get_value(&self, row: usize, col: usize) -> Result<f64> {
        check_row_index(row, self.row_capacity)?;
        check_column_index(col, self.column_capacity)?;

        let Some(segments) = self.rows.get(row) else {
            return Ok(0.0);
        };

        for segment in segments {
            let live = segment.live();
            if let Some(pos) = self.col_indices[live.clone()]
                .iter()
                .position(|&c| c == col)
            {
                return Ok(self.values[live.start + pos]);
            }
        }
        Ok(0.0)
    }

    /// Get a whole row as a vector keyed by column
    ///
    /// `index == row_count()` is accepted and yields an empty vector.
    pub fn get_row(&self, index: usize) -> Result<SparseVector> {
        check_row_limit(index, self.row_count())?;
        Ok(self.row_pairs(index).collect())
    }

    /// Get a whole column as a vector keyed by row
    ///
    /// Scans every stored pair of the matrix.
    pub fn get_column(&self, index: usize) -> Result<SparseVector> {
        check_column_limit(index, self.column_count)?;

        let mut column = SparseVector::new();
        for row in 0..self.rows.len() {
            for (col, value) in self.row_pairs(row) {
                if col == index {
                    column.insert(row, value);
                }
            }
        }
        Ok(column)
    }

    /// Live (column, value) pairs of a row in segment order
    pub(super) fn row_pairs(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.rows
            .get(row)
            .into_iter()
            .flatten()
            .flat_map(move |segment| {
                segment
                    .live()
                    .map(move |slot| (self.col_indices[slot], self.values[slot]))
            })
    }
}
