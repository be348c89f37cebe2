//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source
//! content, allowing the scanner to detect end-of-source without
//! explicit bounds checking. The total buffer size is rounded up to the
//! next 64-byte boundary for cache-line alignment, which also provides
//! safe padding for lookahead near the end of the buffer.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`. All subsequent
/// bytes (cache-line padding) are also `0x00`, ensuring safe reads for
/// lookahead near the end of the buffer.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Copies the source bytes into a cache-line-aligned buffer with a
    /// `0x00` sentinel byte appended.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// `source_len` saturates at `u32::MAX`; the driver rejects
    /// oversized files before they reach the scanner.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled buffer, then copy source bytes.
        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source_still_has_sentinel() {
        let buffer = SourceBuffer::new("");
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert!(buffer.cursor().is_eof());
    }

    #[test]
    fn len_excludes_sentinel_and_padding() {
        let buffer = SourceBuffer::new("var x");
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_bytes(), b"var x");
    }

    #[test]
    fn buffer_is_padded_to_cache_line() {
        // 63 bytes of source + 1 sentinel fills one line exactly;
        // 64 bytes of source forces a second line.
        let buffer = SourceBuffer::new(&"x".repeat(64));
        assert_eq!(buffer.len(), 64);
        let mut cursor = buffer.cursor();
        cursor.advance_n(64);
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn multibyte_source_round_trips() {
        let source = "π = 3.14";
        let buffer = SourceBuffer::new(source);
        assert_eq!(buffer.as_bytes(), source.as_bytes());
    }
}
