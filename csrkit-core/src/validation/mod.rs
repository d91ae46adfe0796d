//! Validation and parsing utilities
//!
//! Pure functions with no storage of their own. Builders and matrices call
//! these before mutating or trusting any data.

pub mod bounds;
pub mod parsing;
pub mod structure;

pub use bounds::{validate_column, validate_dense_len, validate_row_index};
pub use parsing::parse_feature;
pub use structure::{column_count, structure_flags, validate_csr_structure};
