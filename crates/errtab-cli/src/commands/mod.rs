pub mod compile;
pub mod input_loader;


use std::io;
use std::path::PathBuf;

use errtab_core::RegistryError;

/// Failures outside the compiler proper: file system and registry loading.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}:{line}: errordata must be valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid registry file '{}': {source}", path.display())]
    Registry {
        path: PathBuf,
        source: RegistryError,
    },

    #[error(transparent)]
    Compile(#[from] errtab_compiler::Error),
}
