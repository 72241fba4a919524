//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` that is composed into the command.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input files (positional, repeatable).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .required(true)
        .num_args(1..)
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("errordata files (arguments not ending in .errordata are ignored)")
}

/// Symbol infix (--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .value_name("NAME")
        .default_value("Reason")
        .value_parser(parse_table_name)
        .help("Table name used in emitted symbols (kOpenSSL<NAME>Values)")
}

/// Library registry file (--registry).
pub fn registry_arg() -> Arg {
    Arg::new("registry")
        .long("registry")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Library registry file, one name per line (default: built-in BoringSSL list)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("c")
        .value_parser(["c", "json"])
        .help("Output format")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to FILE instead of stdout")
}

/// Validate only (--check).
pub fn check_arg() -> Arg {
    Arg::new("check")
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Validate inputs without emitting anything")
}

/// Color output mode (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}

fn parse_table_name(s: &str) -> Result<String, String> {
    let valid = !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(s.to_string())
    } else {
        Err(format!("`{s}` is not a valid C identifier fragment"))
    }
}
