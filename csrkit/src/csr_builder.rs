//! Incremental compressed sparse row builder
//!
//! Entries arrive row by row and only non-zero values are stored. The
//! builder keeps three parallel growable arrays:
//!
//! - `row_offsets`: start of each opened row in the entry arrays
//! - `col_indices`: column of every stored entry
//! - `values`: value of every stored entry
//!
//! plus the running column count. Row 0 is open from construction; the
//! first `start_row` claims it and every later call opens a new row.
//! Building a matrix copies the arrays, closes the open row and moves the
//! builder to [`BuilderState::Finalized`], after which it rejects all
//! further input.

use crate::config::BuilderConfig;
use crate::csr_matrix::ReadOnlyCsrMatrix;
use crate::growable::{GrowableArray, IndexArray, OffsetArray};
use csrkit_core::{validate_column, CsrError, MatrixBuilder, MatrixElement, MatrixFormat, Result};

/// Lifecycle of a builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Accepting rows and entries
    Building,
    /// A matrix has been built; further input is rejected
    Finalized,
}

/// Builder for [`ReadOnlyCsrMatrix`]
#[derive(Debug, Clone)]
pub struct CsrMatrixBuilder<T: MatrixElement = f64> {
    row_offsets: OffsetArray,
    col_indices: IndexArray,
    values: GrowableArray<T>,
    max_num_columns: usize,
    rows_started: usize,
    state: BuilderState,
    config: BuilderConfig,
}

impl<T: MatrixElement> CsrMatrixBuilder<T> {
    /// Create a builder expecting roughly `initial_capacity` entries
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_config(BuilderConfig::with_capacity(initial_capacity))
    }

    /// Create a builder from a configuration
    pub fn with_config(config: BuilderConfig) -> Self {
        let mut row_offsets = OffsetArray::with_capacity(config.offset_capacity());
        row_offsets.append(0);

        Self {
            row_offsets,
            col_indices: IndexArray::with_capacity(config.entry_capacity()),
            values: GrowableArray::with_capacity(config.entry_capacity()),
            max_num_columns: 0,
            rows_started: 0,
            state: BuilderState::Building,
            config,
        }
    }

    /// Number of rows the built matrix would have right now
    pub fn num_rows(&self) -> usize {
        self.row_offsets.len()
    }

    /// Number of stored entries so far
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Column count so far (one past the largest stored column)
    pub fn num_columns(&self) -> usize {
        self.max_num_columns
    }

    /// Column indices appended so far, in append order
    pub fn column_indices(&self) -> &[u32] {
        self.col_indices.as_slice()
    }

    /// Values appended so far, in append order
    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Current lifecycle state
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Configuration this builder was created with
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Finalize without copying, consuming the builder
    ///
    /// Equivalent to `build_matrix(true)` except that the buffers are moved
    /// into the matrix instead of copied.
    pub fn into_matrix(mut self) -> Result<ReadOnlyCsrMatrix<T>> {
        self.ensure_building()?;
        self.row_offsets.append(self.values.len());

        let matrix = ReadOnlyCsrMatrix::from_validated_parts(
            self.row_offsets.into_boxed_slice(),
            self.col_indices.into_boxed_slice(),
            self.values.into_boxed_slice(),
            self.max_num_columns,
        );
        log_finalized(&matrix);
        Ok(matrix)
    }

    fn ensure_building(&self) -> Result<()> {
        match self.state {
            BuilderState::Building => Ok(()),
            BuilderState::Finalized => Err(CsrError::BuilderFinalized),
        }
    }

    /// Offsets of all opened rows plus the end of the open row
    fn snapshot_offsets(&self) -> Box<[usize]> {
        let mut offsets = Vec::with_capacity(self.row_offsets.len() + 1);
        offsets.extend_from_slice(self.row_offsets.as_slice());
        offsets.push(self.values.len());
        offsets.into_boxed_slice()
    }
}

impl<T: MatrixElement> MatrixBuilder for CsrMatrixBuilder<T> {
    type Element = T;
    type Matrix = ReadOnlyCsrMatrix<T>;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Csr
    }

    fn is_finalized(&self) -> bool {
        self.state == BuilderState::Finalized
    }

    fn start_row(&mut self) -> Result<&mut Self> {
        self.ensure_building()?;
        if self.rows_started > 0 {
            let ptr = self.values.len();
            self.row_offsets.append(ptr);
            log::trace!("opened row {} at offset {ptr}", self.row_offsets.len() - 1);
        }
        self.rows_started += 1;
        Ok(self)
    }

    fn append_entry(&mut self, column: i64, value: T) -> Result<&mut Self> {
        self.ensure_building()?;
        let column = validate_column(column)?;
        if value.is_zero() {
            return Ok(self);
        }

        self.col_indices.append(column);
        self.values.append(value);
        self.max_num_columns = self.max_num_columns.max(column as usize + 1);
        Ok(self)
    }

    fn build_matrix(&mut self, read_only: bool) -> Result<ReadOnlyCsrMatrix<T>> {
        if !read_only {
            return Err(CsrError::MutableMatrixUnsupported);
        }
        self.ensure_building()?;

        let matrix = ReadOnlyCsrMatrix::from_validated_parts(
            self.snapshot_offsets(),
            self.col_indices.freeze(),
            self.values.freeze(),
            self.max_num_columns,
        );
        self.state = BuilderState::Finalized;
        log_finalized(&matrix);
        Ok(matrix)
    }
}

impl<T: MatrixElement> Default for CsrMatrixBuilder<T> {
    fn default() -> Self {
        Self::with_config(BuilderConfig::default())
    }
}

fn log_finalized<T: MatrixElement>(matrix: &ReadOnlyCsrMatrix<T>) {
    log::debug!(
        "finalized {} CSR matrix {}x{} with {} non-zeros",
        T::data_type(),
        matrix.num_rows(),
        matrix.num_columns(),
        matrix.nnz()
    );
}
