//! Error types for the inktags-core library.
//!
//! Every failure the tool can hit is a `CoreError`. Configuration problems are
//! detected before any external process runs; process problems are reported
//! after the invocation that caused them.

use std::io;

use thiserror::Error;

/// Custom error types for inktags-core
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- Configuration errors ----
    #[error(
        "Please provide the inkscape executable, either via the {0} environment variable or --inkscape-executable"
    )]
    MissingExecutable(&'static str),

    #[error("Exactly one action must be given (-x, -l, -a), got {0}")]
    ActionCount(usize),

    #[error("Need an SVG input file (--input)")]
    MissingInput,

    #[error("Needed tag name to export (--tag)")]
    MissingTag,

    #[error("Please provide an output directory (--output)")]
    MissingOutputDir,

    #[error("{what} contains ';', which inkscape reads as an action separator: {value}")]
    ActionSeparator { what: &'static str, value: String },

    // ---- External process errors ----
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed tag extraction: {tag}\non command: {command}\n(exit status: {status})")]
    ExportFailed {
        tag: String,
        command: String,
        status: String,
    },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for inktags-core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a `CommandStart` error for `command`.
pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds an `ExportFailed` error carrying the full command line.
pub fn export_failed_error(
    tag: impl Into<String>,
    command: impl Into<String>,
    status: impl Into<String>,
) -> CoreError {
    CoreError::ExportFailed {
        tag: tag.into(),
        command: command.into(),
        status: status.into(),
    }
}

/// Builds an `ActionSeparator` error for a script argument.
pub fn action_separator_error(what: &'static str, value: impl Into<String>) -> CoreError {
    CoreError::ActionSeparator {
        what,
        value: value.into(),
    }
}
