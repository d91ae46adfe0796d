//! Read-only matrix access traits
//!
//! Downstream numeric routines consume a finalized matrix only through
//! these traits; none of them can mutate storage.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for layout-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get a stored element at the specified position
    ///
    /// Returns `None` if nothing is stored there (the logical value is zero)
    /// or if the position is out of bounds. When a row holds the same column
    /// more than once, the first stored entry wins.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored non-zero elements
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored elements in a row, in insertion order
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all stored elements in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}
