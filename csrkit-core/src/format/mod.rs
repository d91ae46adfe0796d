//! Layout definitions for compressed sparse matrices
//!
//! Pure data definitions - no storage and no I/O.

pub mod constants;
pub mod layout;

pub use layout::{DataType, MatrixFormat};
