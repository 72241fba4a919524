//! Table building across one or more errordata files.
//!
//! Sources are processed as one logical stream in a fixed order (sorted by
//! name), so the same input set always yields byte-identical output. Any
//! failure aborts the build; there is no partial table.

use errtab_core::{ErrorTable, MAX_OFFSET, PackedEntry, Registry};

use crate::Result;
use crate::encoder::EntryEncoder;
use crate::parser::{Record, records};
use crate::source::Source;

/// String data above this share of the offset space triggers a warning.
/// Past the limit there is no recovery short of shortening messages.
pub const CAPACITY_WARNING_PERCENT: usize = 90;

/// Accumulates encoded entries, then sorts them into an [`ErrorTable`].
#[derive(Debug)]
pub struct TableBuilder<'r> {
    encoder: EntryEncoder<'r>,
    entries: Vec<PackedEntry>,
}

impl<'r> TableBuilder<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            encoder: EntryEncoder::new(registry),
            entries: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: &Record) -> Result<PackedEntry> {
        let entry = self.encoder.encode(record)?;
        self.entries.push(entry);
        Ok(entry)
    }

    /// Parse and encode every record of `source`, stopping at the first error.
    ///
    /// Returns the number of records added.
    pub fn add_source(&mut self, source: &Source) -> Result<usize> {
        let mut count = 0;
        for record in records(source) {
            self.add_record(&record?)?;
            count += 1;
        }
        tracing::debug!(file = %source.name, records = count, "read errordata");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort by `(library, reason)` and hand over the finished table.
    pub fn finish(self) -> ErrorTable {
        let Self {
            encoder,
            mut entries,
        } = self;

        entries.sort_by_key(|entry| entry.key());
        let strings = encoder.into_interner().into_blob();

        let limit = MAX_OFFSET as usize + 1;
        tracing::info!(
            "{} bytes of list and {} bytes of string data",
            4 * entries.len(),
            strings.len()
        );
        if strings.len() * 100 >= limit * CAPACITY_WARNING_PERCENT {
            tracing::warn!(
                string_bytes = strings.len(),
                limit,
                "string data is close to the 15-bit offset limit"
            );
        }

        ErrorTable::new(entries, strings)
    }
}

/// Build a table from `sources`, processed in name order regardless of the
/// order given.
pub fn build(registry: &Registry, sources: &[Source]) -> Result<ErrorTable> {
    let mut ordered: Vec<&Source> = sources.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.text.cmp(&b.text)));

    let mut builder = TableBuilder::new(registry);
    for source in ordered {
        builder.add_source(source)?;
    }
    Ok(builder.finish())
}
