//! Error types for DCSR operations

/// Matrix axis named in range errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors that can occur during DCSR operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcsrError {
    /// Row or column index beyond the accepted bound
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },
    /// Operation needs at least one stored element
    EmptyContainer,
    /// Malformed configuration value
    InvalidArgument(&'static str),
}

impl DcsrError {
    /// Shorthand for a row range error
    pub const fn row_out_of_range(index: usize, bound: usize) -> Self {
        DcsrError::IndexOutOfRange {
            axis: Axis::Row,
            index,
            bound,
        }
    }

    /// Shorthand for a column range error
    pub const fn column_out_of_range(index: usize, bound: usize) -> Self {
        DcsrError::IndexOutOfRange {
            axis: Axis::Column,
            index,
            bound,
        }
    }
}

impl core::fmt::Display for DcsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DcsrError::IndexOutOfRange { axis, index, bound } => {
                write!(f, "{axis} index {index} out of range (bound {bound})")
            }
            DcsrError::EmptyContainer => write!(f, "Empty container"),
            DcsrError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DcsrError {}

/// Result type for DCSR operations
pub type Result<T> = core::result::Result<T, DcsrError>;
