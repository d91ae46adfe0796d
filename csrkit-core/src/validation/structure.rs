//! Compressed-row structure validation
//!
//! Checks that raw offset/column/value arrays describe a well-formed
//! compressed-row matrix, and derives structure flags from them.

use crate::format::constants::{LOWER_TRIANGULAR, SORTED_INDICES, UPPER_TRIANGULAR};
use crate::CsrError;

/// Validate the compressed-row invariants of raw parts
///
/// - `row_offsets` describes at least one row and starts at zero
/// - `row_offsets` never decreases
/// - `col_len == val_len == row_offsets[last]`
pub fn validate_csr_structure(
    row_offsets: &[usize],
    col_len: usize,
    val_len: usize,
) -> Result<(), CsrError> {
    if row_offsets.len() < 2 {
        return Err(CsrError::InvalidRowOffsets);
    }
    let (first, last) = (row_offsets[0], row_offsets[row_offsets.len() - 1]);

    if first != 0 {
        return Err(CsrError::InvalidRowOffsets);
    }

    if row_offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(CsrError::InvalidRowOffsets);
    }

    if col_len != val_len || last != col_len {
        return Err(CsrError::LengthMismatch);
    }

    Ok(())
}

/// Column count implied by a set of stored column indices
///
/// One past the largest index, or zero when nothing is stored.
pub fn column_count(col_indices: &[u32]) -> usize {
    col_indices
        .iter()
        .max()
        .map_or(0, |&max| max as usize + 1)
}

/// Derive structure flags from validated compressed-row parts
///
/// `SORTED_INDICES` is set when every row's columns strictly increase,
/// `UPPER_TRIANGULAR`/`LOWER_TRIANGULAR` when no entry lies below/above
/// the diagonal. An empty matrix carries all three.
pub fn structure_flags(row_offsets: &[usize], col_indices: &[u32]) -> u8 {
    let mut sorted = true;
    let mut upper = true;
    let mut lower = true;

    for (row, bounds) in row_offsets.windows(2).enumerate() {
        let cols = &col_indices[bounds[0]..bounds[1]];
        if cols.windows(2).any(|w| w[0] >= w[1]) {
            sorted = false;
        }
        for &col in cols {
            let col = col as usize;
            if col < row {
                upper = false;
            }
            if col > row {
                lower = false;
            }
        }
    }

    let mut flags = 0;
    if sorted {
        flags |= SORTED_INDICES;
    }
    if upper {
        flags |= UPPER_TRIANGULAR;
    }
    if lower {
        flags |= LOWER_TRIANGULAR;
    }
    flags
}
