//! Incremental matrix construction contract
//!
//! A builder accepts entries row by row without knowing the final
//! dimensions and freezes them into a read-only matrix exactly once.
//! Concrete layouts implement this trait; the layout is reported by
//! [`MatrixBuilder::format`].

use super::element::MatrixElement;
use super::matrix::SparseMatrix;
use crate::error::Result;
use crate::format::MatrixFormat;
use crate::validation::parse_feature;

/// Capability set shared by all sparse matrix builders
pub trait MatrixBuilder {
    /// The element type accepted by this builder
    type Element: MatrixElement;

    /// The read-only matrix produced on finalization
    type Matrix: SparseMatrix<Element = Self::Element>;

    /// Storage layout this builder produces
    fn format(&self) -> MatrixFormat;

    /// Whether a matrix has already been built from this builder
    fn is_finalized(&self) -> bool;

    /// Open the next row
    ///
    /// Row 0 is open from construction; the first call claims it and each
    /// later call closes the current row and opens a new one.
    fn start_row(&mut self) -> Result<&mut Self>;

    /// Append a `(column, value)` pair to the current row
    ///
    /// Zero values are accepted and dropped. Negative columns are rejected
    /// without touching the builder.
    fn append_entry(&mut self, column: i64, value: Self::Element) -> Result<&mut Self>;

    /// Freeze the accumulated entries into a matrix
    ///
    /// Only `read_only = true` is supported.
    fn build_matrix(&mut self, read_only: bool) -> Result<Self::Matrix>;

    /// Open a new row and append a dense row, skipping zeros
    ///
    /// Position `i` of `values` becomes column `i`.
    fn append_dense_row(&mut self, values: &[Self::Element]) -> Result<&mut Self> {
        self.start_row()?;
        for (col, &value) in values.iter().enumerate() {
            self.append_entry(col as i64, value)?;
        }
        Ok(self)
    }

    /// Append a `"column:value"` or `"column"` feature to the current row
    ///
    /// A bare column carries the value 1.
    fn append_feature(&mut self, feature: &str) -> Result<&mut Self> {
        let (column, value) = parse_feature(feature)?;
        self.append_entry(column, Self::Element::from_f64(value))
    }

    /// Open a new row and append each feature string to it
    ///
    /// Stops at the first malformed feature; features already appended
    /// to the row are kept.
    fn append_sparse_row<S: AsRef<str>>(&mut self, features: &[S]) -> Result<&mut Self> {
        self.start_row()?;
        for feature in features {
            self.append_feature(feature.as_ref())?;
        }
        Ok(self)
    }
}
