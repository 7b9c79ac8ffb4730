//! Tag listing and prefix filtering.
//!
//! Inkscape's `--query-all` prints one line per element,
//! `id,x,y,width,height`; the identifier is everything before the first comma.

use std::path::Path;

use log::{debug, warn};

use crate::error::CoreResult;
use crate::external::{InkscapeRunner, Invocation};

/// Extracts identifiers from `--query-all` output, in reporting order.
///
/// The empty line after a final newline is dropped. Duplicates are kept.
#[must_use]
pub fn parse_query_output(stdout: &str) -> Vec<String> {
    let mut lines: Vec<&str> = stdout.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| line.split(',').next().unwrap_or_default().to_string())
        .collect()
}

/// Keeps the identifiers starting with `prefix`, order preserved.
///
/// Byte-for-byte and case-sensitive; an empty prefix keeps everything.
#[must_use]
pub fn filter_by_prefix<S: AsRef<str>>(tags: &[S], prefix: &str) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.as_ref())
        .filter(|tag| tag.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

/// Queries every identifier in `input`.
///
/// A non-zero exit from Inkscape is logged and whatever it printed is still
/// parsed, so a silent failure reads as "no tags".
pub fn list_tags<R: InkscapeRunner>(
    runner: &R,
    executable: &Path,
    input: &Path,
) -> CoreResult<Vec<String>> {
    let invocation = Invocation::query_all(executable, input);
    let output = runner.run(&invocation)?;

    if !output.success() {
        warn!(
            "Tag query exited with status {} (command: {})",
            output.status_display(),
            invocation.command_line()
        );
    }

    let tags = parse_query_output(&output.stdout);
    debug!("Query reported {} element(s) in {}", tags.len(), input.display());
    Ok(tags)
}

/// Queries `input` and keeps the identifiers starting with `prefix`.
pub fn list_filtered_tags<R: InkscapeRunner>(
    runner: &R,
    executable: &Path,
    input: &Path,
    prefix: &str,
) -> CoreResult<Vec<String>> {
    let tags = list_tags(runner, executable, input)?;
    Ok(filter_by_prefix(&tags, prefix))
}
