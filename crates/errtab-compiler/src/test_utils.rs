//! Test utilities.

use errtab_core::{ErrorTable, Registry};

use crate::emit::{CEmitter, EmitConfig, JsonEmitter};
use crate::{Error, Source, build};

/// First four BoringSSL libraries: NONE=1, SYS=2, BN=3, RSA=4.
pub fn test_registry() -> Registry {
    Registry::new(["NONE", "SYS", "BN", "RSA"]).expect("valid registry")
}

pub fn sources(files: &[(&str, &str)]) -> Vec<Source> {
    files
        .iter()
        .map(|&(name, text)| Source::new(name, text))
        .collect()
}

pub fn compile(files: &[(&str, &str)]) -> crate::Result<ErrorTable> {
    build(&test_registry(), &sources(files))
}

pub fn expect_table(input: &str) -> ErrorTable {
    compile(&[("test.errordata", input)]).expect("input should compile")
}

pub fn expect_error(input: &str) -> Error {
    compile(&[("test.errordata", input)]).expect_err("input should fail")
}

/// C output without the license preamble.
pub fn expect_c(input: &str) -> String {
    let table = expect_table(input);
    CEmitter::new(&table, &test_registry(), EmitConfig::new().preamble(false)).render()
}

pub fn expect_json(input: &str) -> String {
    let table = expect_table(input);
    JsonEmitter::new(&table, &test_registry(), EmitConfig::new()).render()
}
