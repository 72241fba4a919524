//! Entry encoding: records to packed table words.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use errtab_core::{
    EncodeError, EntryKey, Interner, MAX_LIBRARY_ID, MAX_REASON_CODE, PackedEntry, Registry,
};

use crate::parser::Record;
use crate::source::Location;
use crate::{Error, InputError, Result};

/// Encodes records against a registry, interning messages as it goes.
///
/// A `(library, reason)` pair may be encoded once. The first definition's
/// location is kept so a duplicate can point back at it.
#[derive(Debug)]
pub struct EntryEncoder<'r> {
    registry: &'r Registry,
    interner: Interner,
    seen: HashMap<EntryKey, Location>,
}

impl<'r> EntryEncoder<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            interner: Interner::new(),
            seen: HashMap::new(),
        }
    }

    /// Encode one record.
    ///
    /// Checks run in a fixed order: library name, reason range, library id
    /// range, message interning, then key uniqueness. After an error the
    /// encoder should be discarded; the message may already be interned.
    pub fn encode(&mut self, record: &Record) -> Result<PackedEntry> {
        let library = self.registry.id(&record.library).ok_or_else(|| {
            Error::input(
                record.library_location(),
                InputError::UnknownLibrary(record.library.clone()),
            )
        })?;

        let reason = u16::try_from(record.reason)
            .ok()
            .filter(|&reason| reason <= MAX_REASON_CODE)
            .ok_or_else(|| {
                Error::input(
                    record.reason_location(),
                    EncodeError::ReasonCodeTooLarge(record.reason),
                )
            })?;

        // Registries cap ids at 63, but the field width is checked here too.
        if library.get() > MAX_LIBRARY_ID {
            return Err(Error::input(
                record.library_location(),
                EncodeError::LibraryIdTooLarge(library.get()),
            ));
        }

        let offset = self
            .interner
            .intern(&record.message)
            .map_err(|e| Error::input(record.message_location(), e))?;

        let key = EntryKey::new(library, reason);
        match self.seen.entry(key) {
            Entry::Occupied(first) => {
                return Err(Error::input(
                    record.key_location(),
                    InputError::DuplicateKey {
                        library: record.library.clone(),
                        reason,
                        first: first.get().clone(),
                    },
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(record.location.clone());
            }
        }

        PackedEntry::pack(library, reason.into(), offset.into())
            .map_err(|e| Error::input(record.location.clone(), e))
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn into_interner(self) -> Interner {
        self.interner
    }
}
