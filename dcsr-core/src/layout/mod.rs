//! Physical layout definitions for DCSR storage
//!
//! This module describes how rows map onto the shared column-index and value
//! arrays: segment handles, block sizing and the default constants. It holds
//! no storage itself.

pub mod blocks;
pub mod constants;
pub mod segment;

pub use blocks::{compacted_allocation, row_allocation, row_block_count};
pub use constants::{DEFAULT_SEGMENT_LIST_RESERVE, DEFAULT_SEGMENT_SIZE};
pub use segment::Segment;
