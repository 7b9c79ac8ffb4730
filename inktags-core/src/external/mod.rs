// ============================================================================
// inktags-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Inkscape Executable
//
// This module encapsulates every interaction with the Inkscape command-line
// interface. Invocations are described as plain argument vectors and handed
// to an `InkscapeRunner`, so the tag and export logic can be exercised
// without a real Inkscape installation.
//
// KEY COMPONENTS:
// - Invocation: the argument vector for one Inkscape run
// - RunOutput: exit status and captured stdout of a finished run
// - InkscapeRunner: trait for executing invocations
// - ProcessRunner: concrete implementation using std::process::Command
//
// Arguments are never joined into a shell command line; the rendered command
// string is only used for logging and error messages.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::CoreResult;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Runs invocations through `std::process::Command`
pub mod inkscape_executor;

/// Recording runner for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use inkscape_executor::ProcessRunner;

// ============================================================================
// INVOCATIONS
// ============================================================================

/// Flag asking Inkscape to print `id,x,y,width,height` for every element.
pub const QUERY_ALL_FLAG: &str = "--query-all";

/// How the caller wants the child's stdout handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Capture stdout for parsing
    Capture,
    /// Let the child write straight to the terminal
    Inherit,
}

/// One run of the Inkscape executable, described as an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub executable: PathBuf,
    pub args: Vec<OsString>,
    pub output: OutputMode,
}

impl Invocation {
    /// `<executable> <input> --query-all`
    pub fn query_all(executable: &Path, input: &Path) -> Self {
        Self {
            executable: executable.to_path_buf(),
            args: vec![input.as_os_str().to_os_string(), QUERY_ALL_FLAG.into()],
            output: OutputMode::Capture,
        }
    }

    /// `<executable> <input> --with-gui --batch-process --actions=<script>`
    ///
    /// The verbs need a document window, hence `--with-gui`.
    pub fn batch_actions(executable: &Path, input: &Path, script: &str) -> Self {
        Self {
            executable: executable.to_path_buf(),
            args: vec![
                input.as_os_str().to_os_string(),
                "--with-gui".into(),
                "--batch-process".into(),
                format!("--actions={script}").into(),
            ],
            output: OutputMode::Inherit,
        }
    }

    /// Human-readable command line, for logs and error messages only.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a finished invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code, `None` when the child was killed by a signal
    pub code: Option<i32>,
    /// Captured stdout; empty for `OutputMode::Inherit`
    pub stdout: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit status for messages: the code, or a signal note when there is none.
    pub fn status_display(&self) -> String {
        self.code
            .map_or_else(|| "terminated by signal".to_string(), |c| c.to_string())
    }
}

// ============================================================================
// RUNNER TRAIT
// ============================================================================

/// Something that can execute an [`Invocation`] and wait for it.
///
/// A non-zero exit is *not* an error at this level; callers decide what a
/// failed run means. Only failing to start the process is reported as `Err`.
pub trait InkscapeRunner {
    fn run(&self, invocation: &Invocation) -> CoreResult<RunOutput>;
}
