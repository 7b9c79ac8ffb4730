//! Configuration structures and constants for the inktags-core library.
//!
//! The CLI collects raw flag values into [`ConfigOptions`]; [`CoreConfig::from_options`]
//! validates them and selects exactly one [`Action`].

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

// Default constants

/// Prefix that marks an element identifier as an export candidate.
pub const DEFAULT_PREFIX: &str = "EXPORT_";

/// Environment variable consulted when no executable flag is given.
pub const EXECUTABLE_ENV_VAR: &str = "INKSCAPE_EXE";

/// The single top-level action a run performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Export the element `prefix + tag` to `<output_dir><tag>.pdf`.
    ExportOne { tag: String, output_dir: String },
    /// Report every identifier starting with the prefix.
    List,
    /// Export every identifier starting with the prefix.
    ExportAll { output_dir: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ExportOne { .. } => "export",
            Action::List => "list",
            Action::ExportAll { .. } => "all",
        }
    }
}

/// Unvalidated option values as they come off the command line.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub prefix: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub tag: Option<String>,
    pub export: bool,
    pub list: bool,
    pub all: bool,
    pub executable: Option<String>,
    pub verbose: bool,
}

/// Validated configuration for one inktags run.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Path to the Inkscape executable
    pub executable: PathBuf,

    /// Drawing to query and export from
    pub input: PathBuf,

    /// Identifier prefix; may be empty, in which case every identifier matches
    pub prefix: String,

    pub verbose: bool,

    pub action: Action,
}

impl CoreConfig {
    /// Validates `options` and resolves the action.
    ///
    /// Checks run in a fixed order: executable, action count, input, then the
    /// per-action requirements (tag and output directory).
    pub fn from_options(options: ConfigOptions) -> CoreResult<Self> {
        let executable =
            non_empty(options.executable).ok_or(CoreError::MissingExecutable(EXECUTABLE_ENV_VAR))?;

        let selected = [options.export, options.list, options.all]
            .iter()
            .filter(|flag| **flag)
            .count();
        if selected != 1 {
            return Err(CoreError::ActionCount(selected));
        }

        let input = non_empty(options.input).ok_or(CoreError::MissingInput)?;

        let action = if options.export {
            let tag = non_empty(options.tag).ok_or(CoreError::MissingTag)?;
            let output_dir = non_empty(options.output).ok_or(CoreError::MissingOutputDir)?;
            Action::ExportOne { tag, output_dir }
        } else if options.list {
            Action::List
        } else {
            let output_dir = non_empty(options.output).ok_or(CoreError::MissingOutputDir)?;
            Action::ExportAll { output_dir }
        };

        Ok(Self {
            executable: PathBuf::from(executable),
            input: PathBuf::from(input),
            prefix: options.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            verbose: options.verbose,
            action,
        })
    }

    /// Full identifier for an export-one tag: `prefix + tag`, or just `tag`
    /// when no prefix is configured.
    #[must_use]
    pub fn prefixed_tag(&self, tag: &str) -> String {
        if self.prefix.is_empty() {
            tag.to_string()
        } else {
            format!("{}{}", self.prefix, tag)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
