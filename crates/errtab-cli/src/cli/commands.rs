//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("errtab")
        .about("Compile errordata files into a packed C error table")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("errtab [OPTIONS] <INPUT>...")
        .after_help(
            r#"EXAMPLES:
  errtab crypto/*/*.errordata > err_data.c    # C table on stdout
  errtab --check ssl/ssl.errordata            # validate only
  errtab --format json *.errordata            # decoded table for review
  errtab --registry libs.txt -o out.c *.errordata"#,
        )
        .arg(inputs_arg())
        .arg(name_arg())
        .arg(registry_arg())
        .arg(format_arg())
        .arg(output_arg())
        .arg(check_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
