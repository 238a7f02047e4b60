//! Index range validation for DCSR lookups

use crate::DcsrError;

/// Validate a row index against an exclusive bound
///
/// Used by point lookups, where the bound is the row capacity.
pub const fn check_row_index(index: usize, capacity: usize) -> Result<(), DcsrError> {
    if index >= capacity {
        return Err(DcsrError::row_out_of_range(index, capacity));
    }
    Ok(())
}

/// Validate a column index against an exclusive bound
pub const fn check_column_index(index: usize, capacity: usize) -> Result<(), DcsrError> {
    if index >= capacity {
        return Err(DcsrError::column_out_of_range(index, capacity));
    }
    Ok(())
}

/// Validate a row index against an inclusive limit
///
/// Whole-row extraction accepts `index == count` and yields an empty row.
pub const fn check_row_limit(index: usize, count: usize) -> Result<(), DcsrError> {
    if index > count {
        return Err(DcsrError::row_out_of_range(index, count));
    }
    Ok(())
}

/// Validate a column index against an inclusive limit
pub const fn check_column_limit(index: usize, count: usize) -> Result<(), DcsrError> {
    if index > count {
        return Err(DcsrError::column_out_of_range(index, count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn test_check_row_index() {
        assert_eq!(check_row_index(0, 1), Ok(()));
        assert_eq!(check_row_index(4, 5), Ok(()));
        assert_eq!(
            check_row_index(5, 5),
            Err(DcsrError::IndexOutOfRange {
                axis: Axis::Row,
                index: 5,
                bound: 5
            })
        );
        assert!(check_row_index(0, 0).is_err());
    }

    #[test]
    fn test_check_column_index() {
        assert_eq!(check_column_index(2, 3), Ok(()));
        assert_eq!(
            check_column_index(3, 3),
            Err(DcsrError::column_out_of_range(3, 3))
        );
    }

    #[test]
    fn test_inclusive_limits() {
        // The count itself is accepted
        assert_eq!(check_row_limit(0, 0), Ok(()));
        assert_eq!(check_row_limit(3, 3), Ok(()));
        assert_eq!(check_column_limit(2, 2), Ok(()));

        assert_eq!(check_row_limit(4, 3), Err(DcsrError::row_out_of_range(4, 3)));
        assert_eq!(
            check_column_limit(1, 0),
            Err(DcsrError::column_out_of_range(1, 0))
        );
    }
}
