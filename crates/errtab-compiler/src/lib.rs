//! errtab compiler: errordata parser, table builder, and emitters.
//!
//! This crate turns `LIBRARY,REASON,MESSAGE` records into a packed error table:
//! - `parser` - line-oriented errordata parsing with source locations
//! - `encoder` - registry lookup, interning, packing, duplicate detection
//! - `builder` - multi-file accumulation, deterministic ordering, sorting
//! - `emit` - C literal and JSON rendering
//! - `diagnostics` - snippet rendering for located errors

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod diagnostics;
pub mod emit;
pub mod encoder;
pub mod parser;
pub mod source;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
pub mod test_utils;

use errtab_core::{EncodeError, RegistryError};

pub use builder::{TableBuilder, build};
pub use diagnostics::DiagnosticsPrinter;
pub use emit::{CEmitter, EmitConfig, JsonEmitter};
pub use encoder::EntryEncoder;
pub use parser::{FieldSpans, Record, records};
pub use source::{Location, Source};

/// Errors that can occur while compiling errordata.
///
/// Every error is fatal to the whole build.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A record is malformed or cannot be encoded.
    #[error("{location}: {kind}")]
    Input {
        location: Location,
        kind: InputError,
    },

    /// The library registry itself is unusable.
    #[error("invalid library registry: {0}")]
    Registry(#[from] RegistryError),
}

impl Error {
    pub(crate) fn input(location: Location, kind: impl Into<InputError>) -> Self {
        Self::Input {
            location,
            kind: kind.into(),
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Input { location, .. } => Some(location),
            Self::Registry(_) => None,
        }
    }

    pub fn kind(&self) -> Option<&InputError> {
        match self {
            Self::Input { kind, .. } => Some(kind),
            Self::Registry(_) => None,
        }
    }
}

/// What is wrong with a single input record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("found {0} values but want 3")]
    WrongFieldCount(usize),

    #[error("invalid reason code `{text}`: {source}")]
    InvalidReasonCode {
        text: String,
        source: std::num::ParseIntError,
    },

    #[error("message contains a NUL byte")]
    NulInMessage,

    #[error("unknown library `{0}`")]
    UnknownLibrary(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("duplicate entry for {library},{reason}")]
    DuplicateKey {
        library: String,
        reason: u16,
        first: Location,
    },
}

impl InputError {
    /// Whether the record could not be parsed at all.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::WrongFieldCount(_) | Self::InvalidReasonCode { .. } | Self::NulInMessage
        )
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
