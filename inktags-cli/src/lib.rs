// inktags-cli/src/lib.rs
//
// Library portion of the inktags CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, normalize_args};
pub use error::CliResult;

use inktags_core::{Action, CoreConfig, InkscapeRunner};
use log::debug;

use commands::list::ListFormat;

/// Validates the parsed flags and runs the selected action.
///
/// Configuration errors are returned before `runner` is ever used.
pub fn run<R: InkscapeRunner>(cli: &Cli, runner: &R) -> CliResult<()> {
    let config = CoreConfig::from_options(cli.to_options())?;
    debug!("Running action '{}'", config.action.name());

    match &config.action {
        Action::List => {
            let format = if cli.json { ListFormat::Json } else { ListFormat::Lines };
            commands::list::run_list(runner, &config, format)?;
        }
        Action::ExportOne { tag, output_dir } => {
            commands::export::run_export_one(runner, &config, tag, output_dir)?;
        }
        Action::ExportAll { output_dir } => {
            commands::export::run_export_all(runner, &config, output_dir)?;
        }
    }
    Ok(())
}
