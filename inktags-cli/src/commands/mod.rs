//! Command implementations for the CLI.
//!
//! Each submodule handles one top-level action selected by flag.

/// `--export` and `--all`: run exports with a progress bar and summary.
pub mod export;

/// `--list`: print matching tags.
pub mod list;
