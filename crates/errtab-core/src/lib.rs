#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for errtab error tables.
//!
//! Three layers, leaves first:
//! - **Registry**: fixed, ordered library names with sequential ids
//! - **Packing**: the 32-bit `library:6 | reason:11 | offset:15` entry layout
//! - **Strings**: NUL-terminated string blob with first-occurrence offsets
//!
//! `ErrorTable` ties them together and offers the same binary-search lookup
//! the runtime consumer performs on the emitted data.

mod entry;
mod interner;
mod registry;
mod table;

#[cfg(test)]
mod interner_tests;

pub use entry::{
    EntryKey, LIBRARY_MASK, LIBRARY_SHIFT, LibraryId, MAX_LIBRARY_ID, MAX_OFFSET, MAX_REASON_CODE,
    OFFSET_MASK, PackedEntry, REASON_MASK, REASON_SHIFT,
};
pub use interner::Interner;
pub use registry::{BORINGSSL_LIBRARIES, MAX_LIBRARIES, Registry};
pub use table::{ErrorTable, TableEntry};

/// Errors raised while packing an entry or interning its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("reason code {0} too large (max {MAX_REASON_CODE})")]
    ReasonCodeTooLarge(u64),

    #[error("library id {0} too large (max {MAX_LIBRARY_ID})")]
    LibraryIdTooLarge(u8),

    /// The blob already holds more bytes than a 15-bit offset can address.
    #[error("string data overflow: offset {0} does not fit in 15 bits (max {MAX_OFFSET})")]
    OffsetOverflow(usize),
}

/// Errors raised while constructing a library registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("too many libraries: {0} (max {MAX_LIBRARIES}, ids are 6 bits and 0 is reserved)")]
    Overflow(usize),

    #[error("library `{0}` is registered twice")]
    DuplicateLibrary(String),

    #[error("invalid library name `{0}`: expected [A-Za-z0-9_] and not starting with a digit")]
    InvalidName(String),
}
