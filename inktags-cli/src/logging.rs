// ============================================================================
// inktags-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the inktags binary
//
// Log records go to stderr so stdout stays clean for `--list` output.
//
// USAGE:
// - default: info
// - -v/--verbose: debug (every inkscape command line is logged)
// - RUST_LOG=...: overrides both

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Returns the current local time formatted as "HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialises the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: bool) {
    let mut builder = Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_env(Env::default())
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} {level_style}{:<5}{level_style:#} {}",
                get_timestamp(),
                record.level(),
                record.args()
            )
        });

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
