//! JSON emission of the decoded table.

use errtab_core::{ErrorTable, LibraryId, Registry};
use serde::Serialize;

use super::config::EmitConfig;

#[derive(Serialize)]
struct JsonTable<'a> {
    name: &'a str,
    table_bytes: usize,
    string_bytes: usize,
    libraries: Vec<JsonLibrary<'a>>,
    entries: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonLibrary<'a> {
    id: LibraryId,
    name: &'a str,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    packed: String,
    library: &'a str,
    library_id: LibraryId,
    reason: u16,
    offset: u16,
    message: &'a str,
}

/// JSON emitter: the same table, decoded row by row.
pub struct JsonEmitter<'a> {
    table: &'a ErrorTable,
    registry: &'a Registry,
    config: EmitConfig,
}

impl<'a> JsonEmitter<'a> {
    pub fn new(table: &'a ErrorTable, registry: &'a Registry, config: EmitConfig) -> Self {
        Self {
            table,
            registry,
            config,
        }
    }

    pub fn render(&self) -> String {
        let doc = JsonTable {
            name: self.config.table_name(),
            table_bytes: self.table.table_bytes(),
            string_bytes: self.table.string_data().len(),
            libraries: self
                .registry
                .iter()
                .map(|(id, name)| JsonLibrary { id, name })
                .collect(),
            entries: self
                .table
                .iter()
                .map(|row| JsonEntry {
                    packed: row.packed.to_string(),
                    library: self.registry.name(row.library).unwrap_or(""),
                    library_id: row.library,
                    reason: row.reason,
                    offset: row.offset,
                    message: row.message,
                })
                .collect(),
        };

        let mut out =
            serde_json::to_string_pretty(&doc).expect("serializing plain structs never fails");
        out.push('\n');
        out
    }
}
