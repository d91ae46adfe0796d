//! Element-type dispatch for untyped callers
//!
//! Upstream adapters usually hold plain `f64` values plus a runtime type
//! tag. [`DynamicMatrixBuilder`] picks the concrete element type from a
//! [`DataType`] and converts every incoming value with
//! [`MatrixElement::from_f64`] before the usual zero elision.

use crate::config::BuilderConfig;
use crate::csr_builder::CsrMatrixBuilder;
use crate::csr_matrix::ReadOnlyCsrMatrix;
use csrkit_core::{
    CsrError, DataType, MatrixBuilder, MatrixElement, MatrixFormat, Result, SparseMatrix,
};

/// Match on every variant, binding the inner value
macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Self::F32($inner) => $body,
            Self::F64($inner) => $body,
            Self::I32($inner) => $body,
            Self::I64($inner) => $body,
        }
    };
}

/// Compressed-row builder whose element type is chosen at runtime
#[derive(Debug, Clone)]
pub enum DynamicMatrixBuilder {
    F32(CsrMatrixBuilder<f32>),
    F64(CsrMatrixBuilder<f64>),
    I32(CsrMatrixBuilder<i32>),
    I64(CsrMatrixBuilder<i64>),
}

impl DynamicMatrixBuilder {
    /// Create a builder for `data_type` expecting roughly `initial_capacity` entries
    pub fn new(data_type: DataType, initial_capacity: usize) -> Result<Self> {
        Self::with_config(data_type, BuilderConfig::with_capacity(initial_capacity))
    }

    /// Create a builder for `data_type` from a configuration
    ///
    /// Unsigned element types have no builder.
    pub fn with_config(data_type: DataType, config: BuilderConfig) -> Result<Self> {
        match data_type {
            DataType::F32 => Ok(Self::F32(CsrMatrixBuilder::with_config(config))),
            DataType::F64 => Ok(Self::F64(CsrMatrixBuilder::with_config(config))),
            DataType::I32 => Ok(Self::I32(CsrMatrixBuilder::with_config(config))),
            DataType::I64 => Ok(Self::I64(CsrMatrixBuilder::with_config(config))),
            DataType::U32 | DataType::U64 => Err(CsrError::UnsupportedDataType),
        }
    }

    /// Element type of the matrix being built
    pub fn data_type(&self) -> DataType {
        match self {
            Self::F32(_) => DataType::F32,
            Self::F64(_) => DataType::F64,
            Self::I32(_) => DataType::I32,
            Self::I64(_) => DataType::I64,
        }
    }

    /// Number of rows the built matrix would have right now
    pub fn num_rows(&self) -> usize {
        dispatch!(self, b => b.num_rows())
    }

    /// Number of stored entries so far
    pub fn nnz(&self) -> usize {
        dispatch!(self, b => b.nnz())
    }

    /// Column count so far
    pub fn num_columns(&self) -> usize {
        dispatch!(self, b => b.num_columns())
    }
}

impl MatrixBuilder for DynamicMatrixBuilder {
    type Element = f64;
    type Matrix = DynamicCsrMatrix;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Csr
    }

    fn is_finalized(&self) -> bool {
        dispatch!(self, b => b.is_finalized())
    }

    fn start_row(&mut self) -> Result<&mut Self> {
        dispatch!(self, b => {
            b.start_row()?;
        });
        Ok(self)
    }

    fn append_entry(&mut self, column: i64, value: f64) -> Result<&mut Self> {
        dispatch!(self, b => {
            b.append_entry(column, MatrixElement::from_f64(value))?;
        });
        Ok(self)
    }

    fn build_matrix(&mut self, read_only: bool) -> Result<DynamicCsrMatrix> {
        match self {
            Self::F32(b) => b.build_matrix(read_only).map(DynamicCsrMatrix::F32),
            Self::F64(b) => b.build_matrix(read_only).map(DynamicCsrMatrix::F64),
            Self::I32(b) => b.build_matrix(read_only).map(DynamicCsrMatrix::I32),
            Self::I64(b) => b.build_matrix(read_only).map(DynamicCsrMatrix::I64),
        }
    }
}

/// Read-only matrix produced by [`DynamicMatrixBuilder`]
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicCsrMatrix {
    F32(ReadOnlyCsrMatrix<f32>),
    F64(ReadOnlyCsrMatrix<f64>),
    I32(ReadOnlyCsrMatrix<i32>),
    I64(ReadOnlyCsrMatrix<i64>),
}

impl DynamicCsrMatrix {
    /// Get the number of rows
    pub fn num_rows(&self) -> usize {
        dispatch!(self, m => m.num_rows())
    }

    /// Get the number of columns
    pub fn num_columns(&self) -> usize {
        dispatch!(self, m => m.num_columns())
    }

    /// Get the number of stored entries
    pub fn nnz(&self) -> usize {
        dispatch!(self, m => m.nnz())
    }

    /// Get the element type
    pub fn data_type(&self) -> DataType {
        dispatch!(self, m => m.data_type())
    }

    /// Look up `(row, column)` as f64
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        dispatch!(self, m => m.get(row, column).map(MatrixElement::to_f64))
    }

    /// Iterate over the `(column, value)` pairs of one row as f64
    pub fn row_entries(&self, row: usize) -> Result<Box<dyn Iterator<Item = (u32, f64)> + '_>> {
        dispatch!(self, m => {
            let iter: Box<dyn Iterator<Item = (u32, f64)> + '_> = Box::new(
                m.row(row)?
                    .into_iter()
                    .map(|(col, val)| (col, val.to_f64())),
            );
            Ok(iter)
        })
    }
}

impl SparseMatrix for DynamicCsrMatrix {
    type Element = f64;

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        dispatch!(self, m => m.get_element(row, col).map(MatrixElement::to_f64))
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    fn nnz(&self) -> usize {
        self.nnz()
    }
}
