//! Block sizing arithmetic for segment allocation
//!
//! All storage is handed out in whole blocks of `segment_size` slots. These
//! are pure functions; callers must pass a non-zero `segment_size`
//! (see [`crate::validation::validate_segment_size`]).

/// Number of blocks reserved when a row of `len` elements is appended
///
/// Always one more block than the whole blocks `len` fills, so even an empty
/// row gets a block of padding.
pub const fn row_block_count(len: usize, segment_size: usize) -> usize {
    len / segment_size + 1
}

/// Physical slots reserved when a row of `len` elements is appended
pub const fn row_allocation(len: usize, segment_size: usize) -> usize {
    row_block_count(len, segment_size) * segment_size
}

/// Physical slots reserved for a row of `len` elements during compaction
///
/// Rounds up to the next block boundary. Empty rows still receive one block.
pub const fn compacted_allocation(len: usize, segment_size: usize) -> usize {
    let blocks = len.div_ceil(segment_size);
    if blocks == 0 {
        segment_size
    } else {
        blocks * segment_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_block_count() {
        assert_eq!(row_block_count(0, 5), 1);
        assert_eq!(row_block_count(4, 5), 1);
        assert_eq!(row_block_count(5, 5), 2);
        assert_eq!(row_block_count(5, 2), 3);
        assert_eq!(row_block_count(11, 5), 3);
    }

    #[test]
    fn test_row_allocation() {
        assert_eq!(row_allocation(0, 5), 5);
        assert_eq!(row_allocation(5, 2), 6);
        assert_eq!(row_allocation(6, 2), 8);
        assert_eq!(row_allocation(3, 1), 4);
    }

    #[test]
    fn test_compacted_allocation() {
        assert_eq!(compacted_allocation(0, 5), 5);
        assert_eq!(compacted_allocation(1, 5), 5);
        assert_eq!(compacted_allocation(5, 5), 5);
        assert_eq!(compacted_allocation(6, 5), 10);
        assert_eq!(compacted_allocation(5, 2), 6);
    }
}
