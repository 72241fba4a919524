//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::compile::CompileArgs;

pub struct CompileParams {
    pub inputs: Vec<PathBuf>,
    pub name: String,
    pub registry: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub check: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: m
                .get_many::<PathBuf>("inputs")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            name: m
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_else(|| "Reason".to_string()),
            registry: m.get_one::<PathBuf>("registry").cloned(),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            check: m.get_flag("check"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            inputs: p.inputs,
            name: p.name,
            registry: p.registry,
            format: p.format,
            output: p.output,
            check: p.check,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::C,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
