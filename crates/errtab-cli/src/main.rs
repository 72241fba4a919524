mod cli;
mod commands;
mod logging;

use cli::{CompileParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let params = CompileParams::from_matches(&matches);
    logging::init(params.verbose);
    commands::compile::run(params.into());
}
