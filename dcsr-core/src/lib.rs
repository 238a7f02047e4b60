#![no_std]

//! DCSR Core - Dynamic Compressed Sparse Row definitions
//!
//! This crate provides the layout arithmetic, validation helpers, error type
//! and traits shared by dynamic sparse row matrix implementations. The
//! `SparseVector` interchange type requires the `alloc` feature.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod layout;
#[cfg(feature = "alloc")]
pub mod sparse_vector;
pub mod traits;
pub mod validation;

pub use error::*;
pub use layout::*;
#[cfg(feature = "alloc")]
pub use sparse_vector::{SparseVector, ZERO_TOLERANCE};
pub use traits::*;
pub use validation::*;
