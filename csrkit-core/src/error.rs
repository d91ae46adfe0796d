//! Error types for sparse matrix construction and access

/// Errors that can occur while building or reading a sparse matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrError {
    /// Column index was negative
    NegativeColumn(i64),
    /// Column index does not fit the stored index width
    ColumnOverflow(i64),
    /// Feature string could not be parsed as `column[:value]`
    MalformedFeature,
    /// Dense operand length does not match the matrix dimensions
    DimensionMismatch,
    /// Only read-only matrices can be built
    MutableMatrixUnsupported,
    /// Mutation attempted on a read-only matrix
    ReadOnlyMatrix,
    /// Element type has no builder
    UnsupportedDataType,
    /// Builder was used after it produced a matrix
    BuilderFinalized,
    /// Row or column index out of bounds
    IndexOutOfBounds,
    /// Row offsets are empty, do not start at zero, or decrease
    InvalidRowOffsets,
    /// Column and value arrays disagree with each other or with the offsets
    LengthMismatch,
    /// A zero value is present in stored entries
    StoredZero,
}

/// Coarse classification of [`CsrError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied an argument the operation cannot accept
    InvalidArgument,
    /// Operation is not supported by this matrix or builder
    UnsupportedOperation,
    /// Operation is not legal in the current lifecycle state
    IllegalState,
    /// Index outside the matrix
    Bounds,
    /// Raw parts violate the compressed-row invariants
    CorruptedStructure,
}

impl CsrError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CsrError::NegativeColumn(_)
            | CsrError::ColumnOverflow(_)
            | CsrError::MalformedFeature
            | CsrError::DimensionMismatch => ErrorCategory::InvalidArgument,
            CsrError::MutableMatrixUnsupported
            | CsrError::ReadOnlyMatrix
            | CsrError::UnsupportedDataType => ErrorCategory::UnsupportedOperation,
            CsrError::BuilderFinalized => ErrorCategory::IllegalState,
            CsrError::IndexOutOfBounds => ErrorCategory::Bounds,
            CsrError::InvalidRowOffsets | CsrError::LengthMismatch | CsrError::StoredZero => {
                ErrorCategory::CorruptedStructure
            }
        }
    }

    /// Returns `true` for invalid-argument errors
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.category(), ErrorCategory::InvalidArgument)
    }

    /// Returns `true` for unsupported-operation errors
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.category(), ErrorCategory::UnsupportedOperation)
    }

    /// Returns `true` for illegal-state errors
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self.category(), ErrorCategory::IllegalState)
    }
}

impl core::fmt::Display for CsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CsrError::NegativeColumn(col) => write!(f, "Column index must be non-negative, got {col}"),
            CsrError::ColumnOverflow(col) => write!(f, "Column index {col} exceeds u32 range"),
            CsrError::MalformedFeature => write!(f, "Malformed feature string"),
            CsrError::DimensionMismatch => write!(f, "Operand dimensions do not match matrix"),
            CsrError::MutableMatrixUnsupported => write!(f, "Only readOnly matrix is supported"),
            CsrError::ReadOnlyMatrix => write!(f, "Matrix is read-only"),
            CsrError::UnsupportedDataType => write!(f, "Unsupported element data type"),
            CsrError::BuilderFinalized => write!(f, "Builder has already been finalized"),
            CsrError::IndexOutOfBounds => write!(f, "Index out of bounds"),
            CsrError::InvalidRowOffsets => write!(f, "Invalid row offsets"),
            CsrError::LengthMismatch => write!(f, "Column and value array lengths do not match"),
            CsrError::StoredZero => write!(f, "Stored entries must be non-zero"),
        }
    }
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorCategory::InvalidArgument => "invalid argument",
            ErrorCategory::UnsupportedOperation => "unsupported operation",
            ErrorCategory::IllegalState => "illegal state",
            ErrorCategory::Bounds => "out of bounds",
            ErrorCategory::CorruptedStructure => "corrupted structure",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CsrError {}

/// Result type for csrkit operations
pub type Result<T> = core::result::Result<T, CsrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            CsrError::NegativeColumn(-1).category(),
            ErrorCategory::InvalidArgument
        );
        assert!(CsrError::MalformedFeature.is_invalid_argument());
        assert!(CsrError::MutableMatrixUnsupported.is_unsupported());
        assert!(CsrError::ReadOnlyMatrix.is_unsupported());
        assert!(CsrError::BuilderFinalized.is_illegal_state());
        assert!(!CsrError::IndexOutOfBounds.is_illegal_state());
        assert_eq!(
            CsrError::LengthMismatch.category(),
            ErrorCategory::CorruptedStructure
        );
        assert_eq!(
            CsrError::StoredZero.category(),
            ErrorCategory::CorruptedStructure
        );
    }
}
