//! Compaction of multi-segment rows

use std::collections::BTreeMap;

use dcsr_core::{compacted_allocation, Segment};

use super::DcsrMatrix;

impl DcsrMatrix {
    /// Rebuild the storage so every row occupies exactly one segment
    ///
    /// Pairs are merged per row in column order, later duplicates replacing
    /// earlier ones, and each row is padded to a whole number of blocks. The
    /// new arrays replace the old ones only once every row is rebuilt. Row and
    /// column counts and all values are unchanged.
    pub fn defragment(&mut self) {
        let slots_before = self.watermark;
        let nnz = self.nnz();

        let mut rows = Vec::with_capacity(self.rows.len());
        let mut col_indices = Vec::with_capacity(nnz + self.rows.len() * self.segment_size);
        let mut values = Vec::with_capacity(col_indices.capacity());

        for row in 0..self.rows.len() {
            let merged: BTreeMap<usize, f64> = self.row_pairs(row).collect();

            let offset = col_indices.len();
            let segment = Segment::new(
                offset,
                merged.len(),
                compacted_allocation(merged.len(), self.segment_size),
            );
            for (col, value) in merged {
                col_indices.push(col);
                values.push(value);
            }
            col_indices.resize(segment.end(), 0);
            values.resize(segment.end(), 0.0);

            let mut segments = Vec::with_capacity(self.segment_list_reserve);
            segments.push(segment);
            rows.push(segments);
        }

        self.watermark = col_indices.len();
        self.rows = rows;
        self.col_indices = col_indices;
        self.values = values;
        self.consistent = true;

        log::debug!(
            "Defragmented {} rows: {} -> {} slots ({} stored)",
            self.rows.len(),
            slots_before,
            self.watermark,
            self.nnz()
        );
    }
}
