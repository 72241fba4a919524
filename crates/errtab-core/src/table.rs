//! Finished error table: sorted packed entries plus their string blob.

use crate::entry::{EntryKey, LibraryId, PackedEntry};

/// A sorted table and the blob its offsets point into.
///
/// Immutable once built. Lookups binary-search on the extracted key, exactly
/// as the consumer does on the emitted arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTable {
    entries: Vec<PackedEntry>,
    strings: Vec<u8>,
}

/// A decoded table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry<'a> {
    pub packed: PackedEntry,
    pub library: LibraryId,
    pub reason: u16,
    pub offset: u16,
    pub message: &'a str,
}

impl ErrorTable {
    /// Wrap already sorted entries and their blob.
    ///
    /// `entries` must be sorted by [`PackedEntry::key`] with no repeated keys.
    pub fn new(entries: Vec<PackedEntry>, strings: Vec<u8>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].key() < w[1].key()),
            "table entries must be strictly sorted by key"
        );
        Self { entries, strings }
    }

    pub fn entries(&self) -> &[PackedEntry] {
        &self.entries
    }

    pub fn string_data(&self) -> &[u8] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the emitted `uint32_t` array in bytes.
    pub fn table_bytes(&self) -> usize {
        4 * self.entries.len()
    }

    /// Message for a `(library, reason)` pair.
    pub fn find(&self, library: LibraryId, reason: u16) -> Option<&str> {
        let key = EntryKey::new(library, reason);
        let index = self
            .entries
            .binary_search_by_key(&key, |entry| entry.key())
            .ok()?;
        self.message_at(self.entries[index].offset())
    }

    /// NUL-terminated string starting at `offset`.
    pub fn message_at(&self, offset: u16) -> Option<&str> {
        let rest = self.strings.get(offset as usize..)?;
        let end = rest.iter().position(|&b| b == 0)?;
        std::str::from_utf8(&rest[..end]).ok()
    }

    /// Decoded rows in table order. Rows whose offset is dangling are skipped.
    pub fn iter(&self) -> impl Iterator<Item = TableEntry<'_>> {
        self.entries.iter().filter_map(|&packed| {
            let (library, reason, offset) = packed.unpack();
            let message = self.message_at(offset)?;
            Some(TableEntry {
                packed,
                library,
                reason,
                offset,
                message,
            })
        })
    }
}
