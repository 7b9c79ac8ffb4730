//! Executes Inkscape invocations as child processes.

use std::process::{Command, Stdio};

use log::{debug, trace};

use super::{InkscapeRunner, Invocation, OutputMode, RunOutput};
use crate::error::{CoreResult, command_start_error};

/// Runs invocations with `std::process::Command`, blocking until the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl InkscapeRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> CoreResult<RunOutput> {
        let command_line = invocation.command_line();
        debug!("Running: {command_line}");

        let mut cmd = Command::new(&invocation.executable);
        cmd.args(&invocation.args).stdin(Stdio::null());

        match invocation.output {
            OutputMode::Capture => {
                let output = cmd
                    .stderr(Stdio::inherit())
                    .output()
                    .map_err(|e| command_start_error(&command_line, e))?;
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                trace!("{} bytes of stdout from {command_line}", stdout.len());
                Ok(RunOutput {
                    code: output.status.code(),
                    stdout,
                })
            }
            OutputMode::Inherit => {
                let status = cmd
                    .status()
                    .map_err(|e| command_start_error(&command_line, e))?;
                Ok(RunOutput {
                    code: status.code(),
                    stdout: String::new(),
                })
            }
        }
    }
}
