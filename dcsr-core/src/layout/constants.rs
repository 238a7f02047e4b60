//! Layout constants for DCSR storage

/// Default number of slots per allocation block
pub const DEFAULT_SEGMENT_SIZE: usize = 5;

/// Default initial capacity of each row's segment list
pub const DEFAULT_SEGMENT_LIST_RESERVE: usize = 3;
