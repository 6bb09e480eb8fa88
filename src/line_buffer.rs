//! Append-only byte buffer that a single log line is assembled in.
//!
//! A `LineBuffer` is created once, written into for one log call, handed to
//! the sink and then reset. Resetting only drops the logical length; the
//! allocation stays so the next line is written without touching the
//! allocator. Every readable byte lies in `[0, len)`, so stale bytes from a
//! previous line are never observable.

/// Initial capacity of a freshly allocated buffer.
///
/// Typical lines stay well below this, so steady-state logging never grows
/// the buffer.
pub const DEFAULT_CAPACITY: usize = 256;

/// Growable byte buffer with reset-without-deallocation semantics.
///
/// # Examples
///
/// ```
/// # use line_logger::LineBuffer;
/// let mut buf = LineBuffer::new();
/// buf.append(b"hello");
/// buf.push(b'\n');
/// assert_eq!(buf.bytes(), b"hello\n");
///
/// let cap = buf.capacity();
/// buf.reset();
/// assert!(buf.is_empty());
/// assert_eq!(buf.capacity(), cap);
/// ```
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: Vec<u8>,
}

impl LineBuffer {
    /// Creates an empty buffer with [`DEFAULT_CAPACITY`] bytes reserved.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer with at least `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Appends `bytes` verbatim.
    ///
    /// Grows the storage if the line no longer fits; the growth factor is
    /// whatever `Vec` uses.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Appends a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Sets the length to zero and keeps the allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    /// Current contents.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Extends the buffer by `width` bytes and returns them for in-place
    /// writing. The new bytes start out as ASCII `'0'`.
    #[inline]
    pub(crate) fn reserve_slots(&mut self, width: usize) -> &mut [u8] {
        let start = self.bytes.len();
        self.bytes.resize(start + width, b'0');
        &mut self.bytes[start..]
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for LineBuffer {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let buf = LineBuffer::new();
        assert!(buf.capacity() >= DEFAULT_CAPACITY);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_reset_keeps_storage() {
        let mut buf = LineBuffer::with_capacity(64);
        buf.append(b"2024-03-05 09:07:03 [INFO] first line\n");
        let cap = buf.capacity();

        buf.reset();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), cap);

        buf.append(b"x\n");
        assert_eq!(buf.bytes(), b"x\n");
    }

    #[test]
    fn test_growth_past_initial_capacity() {
        let mut buf = LineBuffer::with_capacity(4);
        buf.append(b"longer than four bytes");
        assert_eq!(buf.bytes(), b"longer than four bytes");
        assert!(buf.capacity() >= buf.len());
    }

    #[test]
    fn test_reserve_slots_are_zero_digits() {
        let mut buf = LineBuffer::new();
        buf.push(b'[');
        let slots = buf.reserve_slots(3);
        assert_eq!(slots, b"000");
        slots[2] = b'7';
        assert_eq!(buf.bytes(), b"[007");
    }
}
