//! Segment handles into the shared column-index and value arrays

use core::ops::Range;

/// A contiguous run of physical slots owned by one row
///
/// Slots in `offset..offset + count` hold live (column, value) pairs. Slots in
/// `offset + count..offset + capacity` are padding reserved for in-place
/// column appends and are never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// First physical slot of the segment
    pub offset: usize,
    /// Number of live slots
    pub count: usize,
    /// Number of allocated slots (a multiple of the segment size)
    pub capacity: usize,
}

impl Segment {
    /// Create a new segment handle
    pub const fn new(offset: usize, count: usize, capacity: usize) -> Self {
        Self {
            offset,
            count,
            capacity,
        }
    }

    /// Whether every allocated slot holds a live pair
    pub const fn is_full(&self) -> bool {
        self.count >= self.capacity
    }

    /// Whether the next column append may write into this segment in place
    ///
    /// A segment whose live count sits on a block boundary is treated as
    /// closed even when padding remains; only an empty segment or a partly
    /// filled block accepts the value.
    pub const fn accepts_in_place(&self, segment_size: usize) -> bool {
        !self.is_full() && (self.count == 0 || self.count % segment_size != 0)
    }

    /// Physical slot the next in-place append writes to
    pub const fn next_slot(&self) -> usize {
        self.offset + self.count
    }

    /// One past the last allocated slot
    pub const fn end(&self) -> usize {
        self.offset + self.capacity
    }

    /// Physical range of the live slots
    pub fn live(&self) -> Range<usize> {
        self.offset..self.offset + self.count
    }
}

impl core::fmt::Display for Segment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}->{}/{}", self.offset, self.count, self.capacity)
    }
}
