//! Append-only growable primitive arrays
//!
//! Builders accumulate offsets, column indices and values in these buffers
//! and freeze them into fixed-size copies when a matrix is produced. The
//! frozen copy never shares memory with the buffer it came from.

use bytemuck::Pod;

/// Append-only buffer of primitive values
///
/// Backing capacity doubles when full, so `append` is amortized O(1).
#[derive(Debug, Clone, PartialEq)]
pub struct GrowableArray<T: Copy> {
    data: Vec<T>,
}

/// Growable column index buffer
pub type IndexArray = GrowableArray<u32>;

/// Growable row offset buffer
pub type OffsetArray = GrowableArray<usize>;

impl<T: Copy> GrowableArray<T> {
    /// Create an empty array
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty array with room for `capacity` values before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Append a value at the end
    #[inline]
    pub fn append(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            // Grow to twice the current capacity, never below four slots
            let additional = self.data.capacity().max(4);
            self.data.reserve(additional);
        }
        self.data.push(value);
    }

    /// Number of appended values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current backing capacity
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Get the value at `index`
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Get the most recently appended value
    pub fn last(&self) -> Option<T> {
        self.data.last().copied()
    }

    /// Borrow the appended values
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy the appended values into an independently owned vector
    ///
    /// With `trim` the copy has no slack capacity; without it the copy keeps
    /// this buffer's capacity so it can keep growing cheaply.
    pub fn materialize(&self, trim: bool) -> Vec<T> {
        if trim {
            return self.data.as_slice().to_vec();
        }
        let mut copy = Vec::with_capacity(self.data.capacity());
        copy.extend_from_slice(&self.data);
        copy
    }

    /// Copy the appended values into a fixed-size array
    pub fn freeze(&self) -> Box<[T]> {
        Box::from(self.data.as_slice())
    }

    /// Consume the buffer into a fixed-size array without copying values
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.data.into_boxed_slice()
    }
}

impl<T: Pod> GrowableArray<T> {
    /// View the appended values as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl<T: Copy> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}
