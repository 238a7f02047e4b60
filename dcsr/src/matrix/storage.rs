//! Row directory growth: append-row and append-column

use dcsr_core::{row_allocation, Segment, SparseVector};

use super::DcsrMatrix;

impl DcsrMatrix {
    /// Append `row` as a new row and return its index
    ///
    /// The row gets a single segment sized to whole blocks, with at least one
    /// free slot left for later column appends.
    pub fn append_row(&mut self, row: &SparseVector) -> usize {
        let dimension = row.dimension();
        self.column_capacity = self.column_capacity.max(dimension);
        self.column_count = self.column_count.max(dimension);

        let segment = Segment::new(
            self.watermark,
            row.len(),
            row_allocation(row.len(), self.segment_size),
        );
        for (col, value) in row {
            self.col_indices.push(col);
            self.values.push(value);
        }
        self.pad_to(segment.end());

        let mut segments = Vec::with_capacity(self.segment_list_reserve);
        segments.push(segment);

        let index = self.rows.len();
        if index == self.row_capacity {
            self.row_capacity += 1;
        }
        self.rows.push(segments);
        index
    }

    /// Append `column` as a new column and return its index
    ///
    /// Missing rows referenced by `column` are created empty first. Each value
    /// lands in place when its row's last segment is empty or ends inside a
    /// partly filled block. A row whose count sits on a block boundary gets a
    /// new segment, which marks the matrix inconsistent until the next
    /// [`DcsrMatrix::defragment`].
    pub fn append_column(&mut self, column: &SparseVector) -> usize {
        let empty = SparseVector::new();
        while self.rows.len() < column.dimension() {
            self.append_row(&empty);
        }

        let index = self.column_count;
        for (row, value) in column {
            self.push_into_row(row, index, value);
        }

        self.column_count += 1;
        if self.column_count > self.column_capacity {
            self.column_capacity += 1;
        }
        index
    }

    fn push_into_row(&mut self, row: usize, col: usize, value: f64) {
        let segment_size = self.segment_size;
        let segments = &mut self.rows[row];
        if let Some(last) = segments
            .last_mut()
            .filter(|segment| segment.accepts_in_place(segment_size))
        {
            let slot = last.next_slot();
            last.count += 1;
            self.col_indices[slot] = col;
            self.values[slot] = value;
            return;
        }

        let segment = Segment::new(self.watermark, 1, self.segment_size);
        if !segments.is_empty() {
            self.consistent = false;
        }
        segments.push(segment);
        log::trace!(
            "Row {} spilled into segment {} at offset {}",
            row,
            segments.len(),
            segment.offset
        );

        self.col_indices.push(col);
        self.values.push(value);
        self.pad_to(segment.end());
    }

    /// Zero-fill both shared arrays up to `end` and move the watermark there
    fn pad_to(&mut self, end: usize) {
        self.col_indices.resize(end, 0);
        self.values.resize(end, 0.0);
        self.watermark = end;
    }
}
