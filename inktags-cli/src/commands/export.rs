//! Implementation of the `--export` and `--all` actions.
//!
//! Prints the run parameters, drives the exports through inktags-core with an
//! indicatif progress bar, and reports a summary at the end.

use indicatif::{ProgressBar, ProgressStyle};
use inktags_core::{
    CoreConfig, ExportJob, ExportReporter, ExportSummary, InkscapeRunner, format_duration,
};
use log::debug;

use crate::error::CliResult;
use crate::terminal;

/// Reports export progress on an indicatif bar.
///
/// The bar is hidden when stderr is not a terminal, and in verbose mode where
/// debug log lines share stderr with it.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    verbose: bool,
}

impl ProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self { bar: None, verbose }
    }
}

impl ExportReporter for ProgressReporter {
    fn on_start(&mut self, total: usize) {
        if self.verbose {
            self.bar = Some(ProgressBar::hidden());
            return;
        }
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("  Exporting: {pos}/{len} [{bar:30}] {elapsed} {msg}")
        {
            bar.set_style(style.progress_chars("##."));
        }
        self.bar = Some(bar);
    }

    fn on_export(&mut self, index: usize, job: &ExportJob) {
        if let Some(bar) = &self.bar {
            bar.set_position(index as u64);
            bar.set_message(format!("{}.pdf", job.out_name));
        }
    }

    fn on_finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        // Still set after a failed export.
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Runs the `--export` action for `tag`.
pub fn run_export_one<R: InkscapeRunner>(
    runner: &R,
    config: &CoreConfig,
    tag: &str,
    output_dir: &str,
) -> CliResult<ExportSummary> {
    display_run_info(config, ("Tag", config.prefixed_tag(tag).as_str()), output_dir);

    let mut reporter = ProgressReporter::new(config.verbose);
    let summary = inktags_core::run_export_one(runner, config, tag, output_dir, &mut reporter)?;

    display_summary(&summary);
    Ok(summary)
}

/// Runs the `--all` action.
pub fn run_export_all<R: InkscapeRunner>(
    runner: &R,
    config: &CoreConfig,
    output_dir: &str,
) -> CliResult<ExportSummary> {
    display_run_info(config, ("Prefix", config.prefix.as_str()), output_dir);

    let mut reporter = ProgressReporter::new(config.verbose);
    let summary = inktags_core::run_export_all(runner, config, output_dir, &mut reporter)?;

    display_summary(&summary);
    Ok(summary)
}

fn display_run_info(config: &CoreConfig, selection: (&str, &str), output_dir: &str) {
    terminal::print_section("export");
    terminal::print_status("Input", &config.input.display().to_string(), false);
    terminal::print_status(selection.0, selection.1, true);
    terminal::print_status("Output", output_dir, false);
    debug!("Executable: {}", config.executable.display());
}

fn display_summary(summary: &ExportSummary) {
    if summary.exported.is_empty() {
        terminal::print_processing("No tags matched; nothing exported");
    } else {
        for path in &summary.exported {
            terminal::print_success(&path.display().to_string());
        }
        terminal::print_processing(&format!("Exported {} PDF(s)", summary.exported.len()));
    }
    terminal::print_status("Total time", &format_duration(summary.elapsed), true);
}
