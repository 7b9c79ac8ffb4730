// inktags-cli/src/main.rs
//
// Entry point for the `inktags` binary: parses arguments, sets up logging,
// runs the selected action and maps failures to exit code 1.

use clap::Parser;
use inktags_cli::{Cli, logging, normalize_args, terminal};
use inktags_core::ProcessRunner;
use std::process;

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    logging::init_logging(cli.verbose);

    if let Err(e) = inktags_cli::run(&cli, &ProcessRunner::new()) {
        log::debug!("Run failed: {e:?}");
        terminal::print_error("inktags failed", &e.to_string());
        process::exit(1);
    }
}
