//! Implementation of the `--list` action.

use std::io::{self, Write};

use inktags_core::{CoreConfig, InkscapeRunner};

use crate::error::{CliErrorContext, CliResult};

/// How the matched tags are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// One identifier per line
    Lines,
    /// A JSON array of identifiers
    Json,
}

/// Lists the tags starting with the prefix and writes them to stdout.
pub fn run_list<R: InkscapeRunner>(
    runner: &R,
    config: &CoreConfig,
    format: ListFormat,
) -> CliResult<Vec<String>> {
    let tags = inktags_core::run_list(runner, config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_tags(&mut handle, &tags, format)?;
    handle.flush().cli_context("Failed to write tag list")?;

    Ok(tags)
}

/// Writes `tags` to `out` in the requested format.
pub fn write_tags<W: Write>(out: &mut W, tags: &[String], format: ListFormat) -> CliResult<()> {
    match format {
        ListFormat::Lines => {
            for tag in tags {
                writeln!(out, "{tag}").cli_context("Failed to write tag list")?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(tags).cli_context("Failed to encode tag list")?;
            writeln!(out, "{json}").cli_context("Failed to write tag list")?;
        }
    }
    Ok(())
}
