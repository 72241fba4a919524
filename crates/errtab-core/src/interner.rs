//! String interning into a single NUL-terminated blob.
//!
//! Each distinct string is stored once; its handle is the byte offset of its
//! first byte. Offsets are assigned in first-occurrence order and must fit
//! the 15-bit offset field of a packed entry.

use std::collections::HashMap;

use crate::EncodeError;
use crate::entry::OFFSET_MASK;

/// Blob interner. Deduplicates strings and returns their blob offsets.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    /// Map from string to its offset for deduplication.
    offsets: HashMap<String, u16>,
    /// Concatenated strings, each followed by a zero byte.
    blob: Vec<u8>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its offset.
    ///
    /// If the string was already interned, returns the existing offset and the
    /// blob does not grow. A new string is rejected when the blob is already
    /// longer than the largest addressable offset. The string itself may run
    /// past that offset; only its first byte must be addressable.
    pub fn intern(&mut self, s: &str) -> Result<u16, EncodeError> {
        if let Some(&offset) = self.offsets.get(s) {
            return Ok(offset);
        }

        let offset = self.blob.len();
        if offset > OFFSET_MASK as usize {
            return Err(EncodeError::OffsetOverflow(offset));
        }

        self.blob.extend_from_slice(s.as_bytes());
        self.blob.push(0);
        self.offsets.insert(s.to_owned(), offset as u16);
        Ok(offset as u16)
    }

    /// Number of distinct strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Blob size in bytes, terminators included.
    #[inline]
    pub fn blob_len(&self) -> usize {
        self.blob.len()
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    pub fn into_blob(self) -> Vec<u8> {
        self.blob
    }
}
