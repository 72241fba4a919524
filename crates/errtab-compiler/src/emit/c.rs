//! C source emission.
//!
//! Output, in order: preamble, one static assertion per registered library
//! plus one on the library count, the packed values array with its length
//! constant, and the string blob as adjacent literals split after each NUL.

use std::fmt::{self, Write};

use errtab_core::{ErrorTable, Registry};

use super::config::EmitConfig;
use super::escape::escape_c_string;

const LICENSE: &str = "\
/* Copyright (c) 2015, Google Inc.
 *
 * Permission to use, copy, modify, and/or distribute this software for any
 * purpose with or without fee is hereby granted, provided that the above
 * copyright notice and this permission notice appear in all copies.
 *
 * THE SOFTWARE IS PROVIDED \"AS IS\" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
 * WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
 * MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
 * SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
 * WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
 * OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
 * CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE. */

/* This file was generated by errtab. Do not edit. */

";

const INCLUDES: &str = "\
#include <openssl/base.h>
#include <openssl/err.h>
#include <openssl/type_check.h>

";

/// C emitter for a finished table.
pub struct CEmitter<'a> {
    table: &'a ErrorTable,
    registry: &'a Registry,
    config: EmitConfig,
}

impl<'a> CEmitter<'a> {
    pub fn new(table: &'a ErrorTable, registry: &'a Registry, config: EmitConfig) -> Self {
        Self {
            table,
            registry,
            config,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        if self.config.preamble {
            w.write_str(LICENSE)?;
        }
        w.write_str(INCLUDES)?;
        w.write_char('\n')?;

        self.format_library_asserts(w)?;
        w.write_char('\n')?;

        self.format_values(w)?;
        self.format_string_data(w)
    }

    /// Bind each registry position to the consumer's `ERR_LIB_*` value.
    fn format_library_asserts(&self, w: &mut impl Write) -> fmt::Result {
        for (id, name) in self.registry.iter() {
            writeln!(
                w,
                "OPENSSL_COMPILE_ASSERT(ERR_LIB_{name} == {id}, library_values_changed_{id});"
            )?;
        }
        writeln!(
            w,
            "OPENSSL_COMPILE_ASSERT(ERR_NUM_LIBS == {}, library_values_changed_num);",
            self.registry.len() + 1
        )
    }

    fn format_values(&self, w: &mut impl Write) -> fmt::Result {
        let values = self.config.values_symbol();

        writeln!(w, "const uint32_t {values}[] = {{")?;
        for entry in self.table.entries() {
            writeln!(w, "    {entry},")?;
        }
        w.write_str("};\n\n")?;

        writeln!(
            w,
            "const size_t {values}Len = sizeof({values}) / sizeof({values}[0]);"
        )?;
        w.write_char('\n')
    }

    /// One literal per interned string; the last literal is always `""`.
    fn format_string_data(&self, w: &mut impl Write) -> fmt::Result {
        write!(w, "const char {}[] =\n    \"", self.config.string_data_symbol())?;

        let data = self.table.string_data();
        let mut rest = data;
        while let Some(end) = rest.iter().position(|&b| b == 0) {
            write!(w, "{}\\0\"\n    \"", escape_c_string(&rest[..end]))?;
            rest = &rest[end + 1..];
        }
        w.write_str(&escape_c_string(rest))?;

        w.write_str("\";\n\n")
    }
}
