//! Human-readable diagnostics for DCSR matrices
//!
//! Nothing here is a stable format. The dump is meant for eyeballing the
//! segment layout while debugging a model build.

use std::fmt;

use hashbrown::HashMap;

use crate::matrix::DcsrMatrix;

/// Summary of how fragmented the row directory is
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentationStats {
    /// Number of populated rows
    pub rows: usize,
    /// Segments across all rows
    pub segments: usize,
    /// Largest segment list of any row
    pub max_segments_per_row: usize,
    /// Live (column, value) slots
    pub stored: usize,
    /// Physical slots, padding included
    pub physical_slots: usize,
    /// Segments-per-row → number of rows with that many segments
    pub histogram: HashMap<usize, usize>,
}

impl FragmentationStats {
    /// Share of physical slots holding live pairs
    pub fn fill_ratio(&self) -> f64 {
        if self.physical_slots == 0 {
            return 1.0;
        }
        self.stored as f64 / self.physical_slots as f64
    }

    /// Rows stored in more than one segment
    pub fn fragmented_rows(&self) -> usize {
        self.histogram
            .iter()
            .filter(|&(&segments, _)| segments > 1)
            .map(|(_, &rows)| rows)
            .sum()
    }
}

impl fmt::Display for FragmentationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} segments (max {} per row, {} fragmented), {}/{} slots used ({:.1}%)",
            self.rows,
            self.segments,
            self.max_segments_per_row,
            self.fragmented_rows(),
            self.stored,
            self.physical_slots,
            self.fill_ratio() * 100.0
        )
    }
}

/// Borrowed view that renders a matrix with `{}`
pub struct MatrixDump<'a> {
    matrix: &'a DcsrMatrix,
}

impl DcsrMatrix {
    /// Collect fragmentation statistics for the current layout
    pub fn fragmentation(&self) -> FragmentationStats {
        let mut histogram = HashMap::new();
        let mut segments = 0;
        let mut max_segments_per_row = 0;

        for row in 0..self.row_count() {
            let count = self.segments(row).map_or(0, <[_]>::len);
            *histogram.entry(count).or_insert(0) += 1;
            segments += count;
            max_segments_per_row = max_segments_per_row.max(count);
        }

        FragmentationStats {
            rows: self.row_count(),
            segments,
            max_segments_per_row,
            stored: self.nnz(),
            physical_slots: self.watermark(),
            histogram,
        }
    }

    /// Render the row directory, the raw arrays and the dense values
    ///
    /// Does not defragment; call [`DcsrMatrix::defragment`] first to see the
    /// compacted layout.
    pub fn dump(&self) -> MatrixDump<'_> {
        MatrixDump { matrix: self }
    }
}

impl fmt::Display for MatrixDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.matrix;

        writeln!(f, "Row directory:")?;
        for row in 0..matrix.row_count() {
            write!(f, "  {row}:")?;
            for segment in matrix.segments(row).unwrap_or_default() {
                write!(f, " {segment}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Column indices:")?;
        write_slots(f, matrix.raw_col_indices())?;
        writeln!(f, "Values:")?;
        write_slots(f, matrix.raw_values())?;

        writeln!(
            f,
            "Dense ({} x {}):",
            matrix.row_capacity(),
            matrix.column_capacity()
        )?;
        for row in 0..matrix.row_capacity() {
            write!(f, " ")?;
            for col in 0..matrix.column_capacity() {
                let value = matrix.get_value(row, col).unwrap_or_default();
                write!(f, " {value}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Segment size: {}", matrix.segment_size())?;
        writeln!(f, "Consistent: {}", matrix.is_consistent())?;
        write!(f, "Fragmentation: {}", matrix.fragmentation())
    }
}

fn write_slots<T: fmt::Display>(f: &mut fmt::Formatter<'_>, slots: &[T]) -> fmt::Result {
    write!(f, " ")?;
    for slot in slots {
        write!(f, " {slot}")?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use dcsr_core::SparseVector;

    fn fragmented() -> DcsrMatrix {
        let mut matrix = DcsrMatrix::new();
        matrix.set_segment_size(2).unwrap();
        matrix.append_row(&[(0, 1.0)].into_iter().collect::<SparseVector>());
        matrix.append_row(&SparseVector::new());
        // Row 0 fills its first block, so its second value spills
        matrix.append_column(&[(0, 2.0), (1, 3.0)].into_iter().collect::<SparseVector>());
        matrix.append_column(&[(0, 4.0)].into_iter().collect::<SparseVector>());
        matrix
    }

    #[test]
    fn test_fragmentation_stats() {
        let matrix = fragmented();
        let stats = matrix.fragmentation();

        assert_eq!(stats.rows, 2);
        assert_eq!(stats.segments, 3);
        assert_eq!(stats.max_segments_per_row, 2);
        assert_eq!(stats.fragmented_rows(), 1);
        assert_eq!(stats.histogram.get(&1), Some(&1));
        assert_eq!(stats.histogram.get(&2), Some(&1));
        assert_eq!(stats.stored, 4);
        assert_eq!(stats.physical_slots, 6);
        assert_relative_eq!(stats.fill_ratio(), 4.0 / 6.0);
    }

    #[test]
    fn test_fragmentation_after_defragment() {
        let mut matrix = fragmented();
        matrix.defragment();
        let stats = matrix.fragmentation();

        assert_eq!(stats.segments, 2);
        assert_eq!(stats.fragmented_rows(), 0);
        assert_eq!(stats.histogram.get(&1), Some(&2));
    }

    #[test]
    fn test_empty_matrix_stats() {
        let stats = DcsrMatrix::new().fragmentation();
        assert_eq!(stats.rows, 0);
        assert_relative_eq!(stats.fill_ratio(), 1.0);
    }

    #[test]
    fn test_dump_contents() {
        let matrix = fragmented();
        let text = matrix.dump().to_string();

        assert!(text.contains("Row directory:"));
        assert!(text.contains("0: 0->2/2 4->1/2"));
        assert!(text.contains("1: 2->1/2"));
        assert!(text.contains("  0 1 1 0 2 0"));
        assert!(text.contains("Dense (2 x 3):"));
        assert!(text.contains("  1 2 4"));
        assert!(text.contains("  0 3 0"));
        assert!(text.contains("Consistent: false"));
    }
}
