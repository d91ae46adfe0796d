//! Index bounds validation
//!
//! Pure checks on caller-supplied indices. Nothing here touches matrix
//! storage, so a failed check never leaves partial state behind.

use crate::format::constants::MAX_COLUMN_INDEX;
use crate::CsrError;

/// Validate a caller-supplied column index and narrow it to storage width
///
/// Negative columns and columns whose count (`column + 1`) would not fit
/// in `u32` are rejected.
pub const fn validate_column(column: i64) -> Result<u32, CsrError> {
    if column < 0 {
        return Err(CsrError::NegativeColumn(column));
    }
    if column > MAX_COLUMN_INDEX {
        return Err(CsrError::ColumnOverflow(column));
    }
    Ok(column as u32)
}

/// Validate a row index against the number of rows
pub const fn validate_row_index(row: usize, num_rows: usize) -> Result<(), CsrError> {
    if row >= num_rows {
        return Err(CsrError::IndexOutOfBounds);
    }
    Ok(())
}

/// Validate that a dense operand covers every column of a matrix
pub const fn validate_dense_len(dense_len: usize, num_columns: usize) -> Result<(), CsrError> {
    if dense_len < num_columns {
        return Err(CsrError::DimensionMismatch);
    }
    Ok(())
}
