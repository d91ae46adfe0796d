//! Read-only compressed sparse row matrix
//!
//! A [`ReadOnlyCsrMatrix`] owns fixed-size copies of the row offsets,
//! column indices and values it was built from. Nothing can change them
//! after construction; mutation methods exist only to report
//! [`CsrError::ReadOnlyMatrix`].

use csrkit_core::{
    column_count, structure_flags, validate_csr_structure, validate_row_index, CsrError,
    DataType, MatrixElement, MatrixFormat, MatrixOperations, Result, SparseMatrix,
};
use hashbrown::HashSet;
use std::iter::{Copied, Zip};
use std::slice::Iter;

/// Immutable matrix in compressed sparse row layout
///
/// Row `i` occupies positions `row_offsets[i]..row_offsets[i + 1]` of
/// `col_indices` and `values`, in the order the entries were appended.
/// Columns within a row are neither sorted nor deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOnlyCsrMatrix<T: MatrixElement = f64> {
    row_offsets: Box<[usize]>,
    col_indices: Box<[u32]>,
    values: Box<[T]>,
    num_columns: usize,
}

impl<T: MatrixElement> ReadOnlyCsrMatrix<T> {
    /// Assemble a matrix from parts the builder has already validated
    pub(crate) fn from_validated_parts(
        row_offsets: Box<[usize]>,
        col_indices: Box<[u32]>,
        values: Box<[T]>,
        num_columns: usize,
    ) -> Self {
        debug_assert!(
            validate_csr_structure(&row_offsets, col_indices.len(), values.len()).is_ok()
        );
        debug_assert_eq!(num_columns, column_count(&col_indices));
        Self {
            row_offsets,
            col_indices,
            values,
            num_columns,
        }
    }

    /// Create a matrix from raw compressed-row arrays
    ///
    /// The column count is derived from the largest stored column index.
    /// Offsets must describe at least one row, and `values` may not hold a
    /// zero since a built matrix never stores one.
    pub fn from_parts(
        row_offsets: Vec<usize>,
        col_indices: Vec<u32>,
        values: Vec<T>,
    ) -> Result<Self> {
        validate_csr_structure(&row_offsets, col_indices.len(), values.len())?;
        if values.iter().any(|value| value.is_zero()) {
            return Err(CsrError::StoredZero);
        }
        let num_columns = column_count(&col_indices);
        Ok(Self {
            row_offsets: row_offsets.into_boxed_slice(),
            col_indices: col_indices.into_boxed_slice(),
            values: values.into_boxed_slice(),
            num_columns,
        })
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.row_offsets.len() - 1
    }

    /// Number of columns (one past the largest stored column)
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.col_indices.len()
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns)
    }

    /// Storage layout
    pub fn format(&self) -> MatrixFormat {
        MatrixFormat::Csr
    }

    /// Element type tag
    pub fn data_type(&self) -> DataType {
        T::data_type()
    }

    /// Row offsets, `num_rows() + 1` long
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// Column index of every stored entry
    pub fn column_indices(&self) -> &[u32] {
        &self.col_indices
    }

    /// Value of every stored entry
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column indices as raw bytes
    pub fn column_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.col_indices)
    }

    /// Values as raw bytes
    pub fn value_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }

    /// Borrow the entries of one row
    pub fn row(&self, row: usize) -> Result<RowView<'_, T>> {
        validate_row_index(row, self.num_rows())?;
        Ok(self.row_unchecked(row))
    }

    fn row_unchecked(&self, row: usize) -> RowView<'_, T> {
        let range = self.row_offsets[row]..self.row_offsets[row + 1];
        RowView {
            index: row,
            columns: &self.col_indices[range.clone()],
            values: &self.values[range],
        }
    }

    /// Number of stored entries in one row
    pub fn row_nnz(&self, row: usize) -> Result<usize> {
        validate_row_index(row, self.num_rows())?;
        Ok(self.row_offsets[row + 1] - self.row_offsets[row])
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> RowIter<'_, T> {
        RowIter {
            matrix: self,
            current_row: 0,
            total_rows: self.num_rows(),
        }
    }

    /// Look up the value at `(row, column)`
    ///
    /// Scans the row in insertion order and returns the first match, or
    /// zero when the column is not stored. Only the row is range-checked;
    /// any column past the last stored one reads as zero.
    pub fn get(&self, row: usize, column: usize) -> Result<T> {
        validate_row_index(row, self.num_rows())?;
        Ok(self.row_unchecked(row).get(column).unwrap_or(T::ZERO))
    }

    /// Whether an entry is stored at `(row, column)`
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.num_rows() && self.row_unchecked(row).get(column).is_some()
    }

    /// Whether any row stores the same column more than once
    pub fn has_duplicate_columns(&self) -> bool {
        let mut seen = HashSet::new();
        self.rows().any(|row| {
            seen.clear();
            !row.columns.iter().all(|&col| seen.insert(col))
        })
    }

    /// Structure flags (`SORTED_INDICES`, `UPPER_TRIANGULAR`, `LOWER_TRIANGULAR`)
    pub fn structure_flags(&self) -> u8 {
        structure_flags(&self.row_offsets, &self.col_indices)
    }

    /// Fraction of logical cells that hold a stored entry
    pub fn density(&self) -> f64 {
        let cells = self.num_rows() * self.num_columns;
        if cells == 0 {
            return 0.0;
        }
        self.nnz() as f64 / cells as f64
    }

    /// Always fails: the matrix is read-only
    pub fn set(&mut self, row: usize, column: usize, _value: T) -> Result<()> {
        log::warn!("rejected set({row}, {column}) on read-only CSR matrix");
        Err(CsrError::ReadOnlyMatrix)
    }

    /// Always fails: the matrix is read-only
    pub fn scale(&mut self, _factor: T) -> Result<()> {
        log::warn!("rejected scale on read-only CSR matrix");
        Err(CsrError::ReadOnlyMatrix)
    }

    /// Always fails: the matrix is read-only
    pub fn clear(&mut self) -> Result<()> {
        log::warn!("rejected clear on read-only CSR matrix");
        Err(CsrError::ReadOnlyMatrix)
    }
}

impl<T: MatrixElement> SparseMatrix for ReadOnlyCsrMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.num_rows() {
            return None;
        }
        self.row_unchecked(row).get(col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.dimensions()
    }

    fn nnz(&self) -> usize {
        self.nnz()
    }
}

impl<T: MatrixElement> MatrixOperations for ReadOnlyCsrMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        self.row(row_index)
            .map(|row| row.values.to_vec())
            .unwrap_or_default()
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        self.rows().filter_map(|row| row.get(col_index)).collect()
    }
}

/// Borrowed entries of a single row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowView<'a, T: MatrixElement> {
    index: usize,
    columns: &'a [u32],
    values: &'a [T],
}

impl<'a, T: MatrixElement> RowView<'a, T> {
    /// Row index within the matrix
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stored entries in this row
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether this row stores nothing
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column indices in insertion order
    pub fn columns(&self) -> &'a [u32] {
        self.columns
    }

    /// Values in insertion order
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// First stored value for `column`, if any
    pub fn get(&self, column: usize) -> Option<T> {
        self.columns
            .iter()
            .position(|&col| col as usize == column)
            .map(|pos| self.values[pos])
    }

    /// Iterate over `(column, value)` pairs in insertion order
    pub fn iter(&self) -> RowEntries<'a, T> {
        self.columns
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// Iterator over the `(column, value)` pairs of a row
pub type RowEntries<'a, T> = Zip<Copied<Iter<'a, u32>>, Copied<Iter<'a, T>>>;

impl<'a, T: MatrixElement> IntoIterator for RowView<'a, T> {
    type Item = (u32, T);
    type IntoIter = RowEntries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all rows of a [`ReadOnlyCsrMatrix`]
pub struct RowIter<'a, T: MatrixElement> {
    matrix: &'a ReadOnlyCsrMatrix<T>,
    current_row: usize,
    total_rows: usize,
}

impl<'a, T: MatrixElement> Iterator for RowIter<'a, T> {
    type Item = RowView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row >= self.total_rows {
            return None;
        }

        let row_index = self.current_row;
        self.current_row += 1;

        Some(self.matrix.row_unchecked(row_index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T: MatrixElement> ExactSizeIterator for RowIter<'a, T> {
    fn len(&self) -> usize {
        self.total_rows.saturating_sub(self.current_row)
    }
}
