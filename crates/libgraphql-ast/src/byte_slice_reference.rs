/// Compact reference to a run of bytes inside an [`Input`](crate::Input)
/// buffer. 8 bytes per reference.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// buffer that produced it. A reference is only meaningful relative to that
/// buffer: moving a name into another [`Document`](crate::Document) means
/// re-appending its bytes there and using the fresh reference.
///
/// `u32` offsets support buffers up to 4 GiB, which is sufficient for any
/// GraphQL document plus every name synthesized while normalizing it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct ByteSliceReference {
    /// Offset of the first referenced byte (inclusive).
    pub start: u32,
    /// Offset one past the last referenced byte (exclusive).
    pub end: u32,
}

impl ByteSliceReference {
    /// Creates a new `ByteSliceReference` from start (inclusive) and end
    /// (exclusive) byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Returns the length of the referenced run in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this reference covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
