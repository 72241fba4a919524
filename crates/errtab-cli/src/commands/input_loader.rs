use std::fs;
use std::path::{Path, PathBuf};

use errtab_compiler::Source;
use errtab_core::Registry;

use super::CliError;

pub const INPUT_EXTENSION: &str = "errordata";

/// Keep only `.errordata` paths, in argument order.
///
/// Build systems tend to pass unrelated paths along with the inputs; those
/// are dropped with a debug log. Processing order is fixed later by
/// `errtab_compiler::build`.
pub fn select_inputs(args: &[PathBuf]) -> Vec<PathBuf> {
    args.iter()
        .filter(|path| {
            let keep = path
                .extension()
                .map(|ext| ext == INPUT_EXTENSION)
                .unwrap_or(false);
            if !keep {
                tracing::debug!(path = %path.display(), "ignoring non-errordata argument");
            }
            keep
        })
        .cloned()
        .collect()
}

pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<Source>, CliError> {
    paths.iter().map(|path| load_source(path)).collect()
}

fn load_source(path: &Path) -> Result<Source, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|err| {
        let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        CliError::InvalidUtf8 {
            path: path.to_path_buf(),
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;
    Ok(Source::new(path.to_string_lossy(), text))
}

/// Registry from `path`, or the built-in BoringSSL list.
pub fn load_registry(path: Option<&Path>) -> Result<Registry, CliError> {
    let Some(path) = path else {
        return Ok(Registry::boringssl());
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = Registry::parse(&text).map_err(|source| CliError::Registry {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), libraries = registry.len(), "loaded registry");
    Ok(registry)
}
