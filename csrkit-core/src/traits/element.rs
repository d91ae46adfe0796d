//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as values of a compressed sparse matrix.

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared against zero for elision
/// - Pod: Can be viewed as raw bytes without copying
/// - Send + Sync: A finalized matrix can be shared between threads
pub trait MatrixElement:
    Copy + PartialEq + core::fmt::Debug + bytemuck::Pod + Send + Sync + 'static
{
    /// The additive identity, never stored in a sparse matrix
    const ZERO: Self;

    /// Get the DataType tag for this element type
    fn data_type() -> DataType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Whether this value would be elided on insertion
    ///
    /// Uses `==` so negative zero counts as zero and NaN does not.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $tag:ident, $zero:expr;)*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = $zero;

                #[inline]
                fn data_type() -> DataType {
                    DataType::$tag
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

// Integer conversions truncate toward zero and saturate at the type bounds
impl_matrix_element! {
    f32 => F32, 0.0;
    f64 => F64, 0.0;
    i32 => I32, 0;
    i64 => I64, 0;
    u32 => U32, 0;
    u64 => U64, 0;
}
