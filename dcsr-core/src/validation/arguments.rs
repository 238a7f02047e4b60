//! Configuration argument validation

use crate::DcsrError;

/// Validate a block size for segment allocation
///
/// A zero-sized block cannot hold any pair and would make every block
/// computation divide by zero.
pub const fn validate_segment_size(segment_size: usize) -> Result<(), DcsrError> {
    if segment_size == 0 {
        return Err(DcsrError::InvalidArgument("segment size must be non-zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_segment_size() {
        assert_eq!(validate_segment_size(1), Ok(()));
        assert_eq!(validate_segment_size(5), Ok(()));
        assert!(matches!(
            validate_segment_size(0),
            Err(DcsrError::InvalidArgument(_))
        ));
    }
}
