//! Packed entry encoding.
//!
//! Layout of one table word, most significant bit first:
//! - Bits 31-26: library id (6 bits, 0 reserved)
//! - Bits 25-15: reason code (11 bits)
//! - Bits 14-0: byte offset into the string blob (15 bits)
//!
//! The upper 17 bits form the lookup key. Sorting by that key is what lets
//! the consumer binary-search without looking at the offset.

use serde::Serialize;

use crate::EncodeError;

pub const LIBRARY_SHIFT: u32 = 26;
pub const REASON_SHIFT: u32 = 15;

pub const LIBRARY_MASK: u32 = 0x3f;
pub const REASON_MASK: u32 = 0x7ff;
/// Bottom 15 bits: selects the string offset from a packed word.
pub const OFFSET_MASK: u32 = 0x7fff;

pub const MAX_LIBRARY_ID: u8 = LIBRARY_MASK as u8;
pub const MAX_REASON_CODE: u16 = REASON_MASK as u16;
pub const MAX_OFFSET: u16 = OFFSET_MASK as u16;

/// Numeric library identifier.
///
/// Registries hand out ids starting at 1. The type itself accepts any `u8`
/// so that out-of-range ids coming from elsewhere are caught at pack time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct LibraryId(u8);

impl LibraryId {
    #[inline]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for LibraryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `(library, reason)` pair a table is sorted and searched by.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct EntryKey {
    pub library: LibraryId,
    pub reason: u16,
}

impl EntryKey {
    pub const fn new(library: LibraryId, reason: u16) -> Self {
        Self { library, reason }
    }

    /// The key's bits in packed position, offset bits zeroed.
    pub const fn to_bits(self) -> u32 {
        ((self.library.0 as u32) << LIBRARY_SHIFT) | ((self.reason as u32) << REASON_SHIFT)
    }
}

/// One table word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PackedEntry(u32);

impl PackedEntry {
    /// Pack a triple, rejecting any field that does not fit its bit range.
    pub fn pack(library: LibraryId, reason: u32, offset: usize) -> Result<Self, EncodeError> {
        if library.0 > MAX_LIBRARY_ID {
            return Err(EncodeError::LibraryIdTooLarge(library.0));
        }
        if reason > REASON_MASK {
            return Err(EncodeError::ReasonCodeTooLarge(reason.into()));
        }
        if offset > OFFSET_MASK as usize {
            return Err(EncodeError::OffsetOverflow(offset));
        }

        Ok(Self(
            EntryKey::new(library, reason as u16).to_bits() | offset as u32,
        ))
    }

    /// Wrap a raw word, e.g. one read back from emitted data.
    #[inline]
    pub const fn from_raw(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn library(self) -> LibraryId {
        LibraryId(((self.0 >> LIBRARY_SHIFT) & LIBRARY_MASK) as u8)
    }

    #[inline]
    pub const fn reason(self) -> u16 {
        ((self.0 >> REASON_SHIFT) & REASON_MASK) as u16
    }

    #[inline]
    pub const fn offset(self) -> u16 {
        (self.0 & OFFSET_MASK) as u16
    }

    /// Extracted sort key. Never compare full words: that would also order by offset.
    #[inline]
    pub const fn key(self) -> EntryKey {
        EntryKey::new(self.library(), self.reason())
    }

    pub const fn unpack(self) -> (LibraryId, u16, u16) {
        (self.library(), self.reason(), self.offset())
    }
}

impl std::fmt::Display for PackedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}
