//! csrkit - Incremental compressed sparse row matrix construction
//!
//! This library builds read-only CSR matrices from a stream of rows whose
//! final dimensions are unknown up front. Entries are appended row by row,
//! zero values are dropped on the way in, and the builder is frozen exactly
//! once into a matrix that owns its own copy of the data.
//!
//! ## Architecture
//!
//! csrkit separates contracts from storage:
//!
//! - **csrkit-core**: Element types, builder and matrix traits, errors and
//!   validation (`no_std`, no allocation required)
//! - **csrkit**: Growable buffers, the CSR builder, read-only matrices and
//!   row kernels
//!
//! ## Quick Start
//!
//! ```rust
//! use csrkit::{CsrMatrixBuilder, MatrixBuilder};
//!
//! fn example() -> csrkit::Result<()> {
//!     let mut builder = CsrMatrixBuilder::<f64>::new(16);
//!     builder.start_row()?.append_entry(0, 1.5)?.append_entry(3, 2.0)?;
//!     builder.start_row()?.append_feature("1:4.0")?;
//!
//!     let matrix = builder.build_matrix(true)?;
//!     assert_eq!(matrix.dimensions(), (2, 4));
//!     assert_eq!(matrix.get(1, 1)?, 4.0);
//!     assert_eq!(matrix.get(1, 0)?, 0.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Amortized appends**: Growable primitive buffers double when full
//! - **Zero elision**: Only non-zero values are stored
//! - **Feature strings**: `"column:value"` rows straight from text inputs
//! - **Runtime element types**: [`DynamicMatrixBuilder`] for tagged input
//! - **Parallel kernels**: Row dot products and matvec over rayon

// Re-export core abstractions
pub use csrkit_core::{
    // Core traits
    MatrixBuilder, MatrixElement, MatrixOperations, SparseMatrix,
    // Format definitions
    DataType, MatrixFormat,
    // Error handling
    CsrError, ErrorCategory, Result,
    // Validation utilities
    parse_feature, validate_column,
};

// Implementation modules
pub mod config;
pub mod csr_builder;
pub mod csr_matrix;
pub mod dynamic;
pub mod growable;
pub mod ops;

// Public exports
pub use config::BuilderConfig;
pub use csr_builder::{BuilderState, CsrMatrixBuilder};
pub use csr_matrix::{ReadOnlyCsrMatrix, RowEntries, RowIter, RowView};
pub use dynamic::{DynamicCsrMatrix, DynamicMatrixBuilder};
pub use growable::{GrowableArray, IndexArray, OffsetArray};
pub use ops::{matvec, row_dot};
