#![no_std]

//! csrkit core - compressed sparse row construction contracts
//!
//! This crate provides the error type, element and builder traits, layout
//! tags and pure validation helpers shared by sparse matrix builders. It
//! holds no storage of its own.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{
    column_count, parse_feature, structure_flags, validate_column, validate_csr_structure,
    validate_dense_len, validate_row_index,
};
