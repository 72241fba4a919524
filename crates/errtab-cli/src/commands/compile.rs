use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use errtab_compiler::{CEmitter, EmitConfig, JsonEmitter};

use super::CliError;
use super::input_loader::{load_registry, load_sources, select_inputs};
use crate::cli::OutputFormat;

pub struct CompileArgs {
    pub inputs: Vec<PathBuf>,
    pub name: String,
    pub registry: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub check: bool,
    pub color: bool,
}

pub fn run(args: CompileArgs) {
    let Err(err) = execute(&args) else {
        return;
    };

    match &err {
        CliError::Compile(compile_err) => eprint!("{}", compile_err.render_colored(args.color)),
        other => eprintln!("error: {}", other),
    }
    std::process::exit(1);
}

/// Compile the inputs and write the rendered table.
///
/// Returns `Ok(None)` in check mode, otherwise the rendered text that was
/// written.
pub fn execute(args: &CompileArgs) -> Result<Option<String>, CliError> {
    let registry = load_registry(args.registry.as_deref())?;

    let inputs = select_inputs(&args.inputs);
    if inputs.is_empty() {
        tracing::warn!("no .errordata inputs given, emitting an empty table");
    }
    let sources = load_sources(&inputs)?;

    let table = errtab_compiler::build(&registry, &sources)?;
    if args.check {
        tracing::info!(entries = table.len(), "check passed");
        return Ok(None);
    }

    let config = EmitConfig::new().name(&args.name);
    let rendered = match args.format {
        OutputFormat::C => CEmitter::new(&table, &registry, config).render(),
        OutputFormat::Json => JsonEmitter::new(&table, &registry, config).render(),
    };

    write_output(args.output.as_deref(), &rendered)?;
    Ok(Some(rendered))
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}
