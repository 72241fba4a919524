//! Errordata parsing.
//!
//! One record per non-empty line: `LIBRARY,REASON_CODE,MESSAGE`. Lines are
//! trimmed and blank lines skipped. Exactly three comma-separated fields are
//! required, so messages cannot contain commas. The library and reason fields
//! are trimmed; the message is kept verbatim.

use std::ops::Range;
use std::sync::Arc;

use crate::source::{Location, Source};
use crate::{Error, InputError, Result};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Location of the whole trimmed line.
    pub location: Location,
    pub library: String,
    /// Range checks happen at encode time, so this may exceed the 11-bit field.
    pub reason: u64,
    pub message: String,
    pub spans: FieldSpans,
}

/// Byte ranges of each field within the record's line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpans {
    pub library: Range<usize>,
    pub reason: Range<usize>,
    pub message: Range<usize>,
}

impl Record {
    pub fn library_location(&self) -> Location {
        self.location.at(self.spans.library.clone())
    }

    pub fn reason_location(&self) -> Location {
        self.location.at(self.spans.reason.clone())
    }

    pub fn message_location(&self) -> Location {
        self.location.at(self.spans.message.clone())
    }

    /// Library and reason fields together.
    pub fn key_location(&self) -> Location {
        self.location
            .at(self.spans.library.start..self.spans.reason.end)
    }
}

/// Iterate the records of one source, in line order.
///
/// Each item is parsed lazily so callers can stop at the first error.
pub fn records(source: &Source) -> impl Iterator<Item = Result<Record>> + '_ {
    let file: Arc<str> = Arc::from(source.name.as_str());
    source
        .text
        .lines()
        .enumerate()
        .filter_map(move |(index, raw)| parse_line(&file, index + 1, raw).transpose())
}

/// Parse one raw line. Blank lines yield `Ok(None)`.
pub fn parse_line(file: &Arc<str>, line: usize, raw: &str) -> Result<Option<Record>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let start = raw.len() - raw.trim_start().len();
    let location = Location::new(
        file.clone(),
        line,
        Arc::from(raw),
        start..start + trimmed.len(),
    );

    let fields: Vec<&str> = trimmed.split(',').collect();
    let [library, reason, message] = fields.as_slice() else {
        return Err(Error::input(
            location,
            InputError::WrongFieldCount(fields.len()),
        ));
    };

    let library_start = start;
    let reason_start = library_start + library.len() + 1;
    let message_start = reason_start + reason.len() + 1;
    let spans = FieldSpans {
        library: trimmed_span(library_start, library),
        reason: trimmed_span(reason_start, reason),
        message: message_start..message_start + message.len(),
    };

    let reason_text = reason.trim();
    let reason = reason_text.parse::<u64>().map_err(|source| {
        Error::input(
            location.at(spans.reason.clone()),
            InputError::InvalidReasonCode {
                text: reason_text.to_string(),
                source,
            },
        )
    })?;

    if message.contains('\0') {
        return Err(Error::input(
            location.at(spans.message.clone()),
            InputError::NulInMessage,
        ));
    }

    Ok(Some(Record {
        location,
        library: library.trim().to_string(),
        reason,
        message: message.to_string(),
        spans,
    }))
}

/// Span of `field` (starting at `start`) with surrounding whitespace removed.
fn trimmed_span(start: usize, field: &str) -> Range<usize> {
    let lead = field.len() - field.trim_start().len();
    let begin = start + lead;
    begin..begin + field.trim().len()
}
