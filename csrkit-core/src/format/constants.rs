//! Constants shared by builders and matrices

/// Default initial capacity hint for builder buffers
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Largest column index a compressed-row matrix can store
///
/// Column indices are stored as `u32` and `column + 1` must stay
/// representable as the column count.
pub const MAX_COLUMN_INDEX: i64 = u32::MAX as i64 - 1;

/// Structure flags reported by a finalized matrix
pub const UPPER_TRIANGULAR: u8 = 2;
pub const LOWER_TRIANGULAR: u8 = 4;
pub const SORTED_INDICES: u8 = 8;
