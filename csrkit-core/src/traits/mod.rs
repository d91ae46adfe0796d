//! Abstract interfaces for sparse matrix construction and access
//!
//! Traits are pure interfaces - concrete layouts live in the `csrkit` crate.

pub mod builder;
pub mod element;
pub mod matrix;

pub use builder::MatrixBuilder;
pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseMatrix;
