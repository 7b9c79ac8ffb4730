//! Action dispatch: export one tag, list tags, or export all tags.
//!
//! Each action runs strictly sequentially. For export-all the first failed
//! export ends the run; later identifiers are never attempted. Every job's
//! action script is checked before the first export starts, so an identifier
//! that cannot be exported stops the run before anything is written.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::{Action, CoreConfig};
use crate::error::{CoreError, CoreResult};
use crate::export::{ExportJob, export_by_tag};
use crate::external::InkscapeRunner;
use crate::tags::list_filtered_tags;

/// Receives progress notifications while exports run.
///
/// All methods default to doing nothing.
pub trait ExportReporter {
    /// Called once with the number of exports about to run.
    fn on_start(&mut self, _total: usize) {}

    /// Called before each export; `index` is zero-based.
    fn on_export(&mut self, _index: usize, _job: &ExportJob) {}

    /// Called after the last export succeeded.
    fn on_finish(&mut self) {}
}

/// Reporter that ignores every notification.
#[derive(Debug, Default)]
pub struct NullReporter;

impl ExportReporter for NullReporter {}

/// What an export action produced.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// PDF paths, in export order
    pub exported: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Result of a dispatched action.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Listed(Vec<String>),
    Exported(ExportSummary),
}

/// Runs the action selected in `config`.
pub fn run_action<R, P>(runner: &R, config: &CoreConfig, reporter: &mut P) -> CoreResult<RunOutcome>
where
    R: InkscapeRunner,
    P: ExportReporter + ?Sized,
{
    match &config.action {
        Action::ExportOne { tag, output_dir } => {
            run_export_one(runner, config, tag, output_dir, reporter).map(RunOutcome::Exported)
        }
        Action::List => run_list(runner, config).map(RunOutcome::Listed),
        Action::ExportAll { output_dir } => {
            run_export_all(runner, config, output_dir, reporter).map(RunOutcome::Exported)
        }
    }
}

/// Exports `prefix + tag` (or `tag` with no prefix) as `<output_dir><tag>.pdf`.
pub fn run_export_one<R, P>(
    runner: &R,
    config: &CoreConfig,
    tag: &str,
    output_dir: &str,
    reporter: &mut P,
) -> CoreResult<ExportSummary>
where
    R: InkscapeRunner,
    P: ExportReporter + ?Sized,
{
    debug!("Opening inkscape to export by name {tag}");
    if !config.prefix.is_empty() {
        debug!(
            "Found prefix {}, using it, looking for {}{}",
            config.prefix, config.prefix, tag
        );
    }

    let job = ExportJob::new(config.prefixed_tag(tag), tag, output_dir);
    run_jobs(runner, config, &[job], reporter)
}

/// Returns every identifier in the input that starts with the prefix.
pub fn run_list<R: InkscapeRunner>(runner: &R, config: &CoreConfig) -> CoreResult<Vec<String>> {
    debug!("Opening inkscape to find all tags with \"{}\"", config.prefix);
    let tags = list_filtered_tags(runner, &config.executable, &config.input, &config.prefix)?;
    info!("Tags found: {tags:?}");
    Ok(tags)
}

/// Exports every identifier starting with the prefix, in query order.
pub fn run_export_all<R, P>(
    runner: &R,
    config: &CoreConfig,
    output_dir: &str,
    reporter: &mut P,
) -> CoreResult<ExportSummary>
where
    R: InkscapeRunner,
    P: ExportReporter + ?Sized,
{
    debug!("Opening inkscape to export all elements with \"{}\"", config.prefix);
    let tags = list_filtered_tags(runner, &config.executable, &config.input, &config.prefix)?;
    info!("Tags found: {tags:?}");

    let jobs: Vec<ExportJob> = tags
        .iter()
        .map(|tag| ExportJob::from_prefixed(tag, &config.prefix, output_dir))
        .collect();
    run_jobs(runner, config, &jobs, reporter)
}

fn run_jobs<R, P>(
    runner: &R,
    config: &CoreConfig,
    jobs: &[ExportJob],
    reporter: &mut P,
) -> CoreResult<ExportSummary>
where
    R: InkscapeRunner,
    P: ExportReporter + ?Sized,
{
    let start = Instant::now();

    for job in jobs {
        job.action_script()?;
    }

    if let Some(first) = jobs.first() {
        ensure_output_dir(&first.out_dir)?;
    }

    reporter.on_start(jobs.len());
    let mut exported = Vec::with_capacity(jobs.len());
    for (index, job) in jobs.iter().enumerate() {
        reporter.on_export(index, job);
        exported.push(export_by_tag(runner, &config.executable, &config.input, job)?);
    }
    reporter.on_finish();

    Ok(ExportSummary {
        exported,
        elapsed: start.elapsed(),
    })
}

fn ensure_output_dir(dir: &str) -> CoreResult<()> {
    let path = Path::new(dir);
    if path.is_dir() {
        return Ok(());
    }
    debug!("Creating output directory {}", path.display());
    fs::create_dir_all(path).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOptions;
    use crate::external::mocks::MockInkscapeRunner;
    use tempfile::tempdir;

    const QUERY: &str = "EXPORT_box,0,0,1,1\nEXPORT_circle,0,0,2,2\nOTHER_x,0,0,3,3\n";

    fn config(options: ConfigOptions) -> CoreConfig {
        CoreConfig::from_options(ConfigOptions {
            input: Some("drawing.svg".to_string()),
            executable: Some("inkscape".to_string()),
            ..options
        })
        .unwrap()
    }

    #[derive(Default)]
    struct RecordingReporter {
        total: Option<usize>,
        seen: Vec<String>,
        finished: bool,
    }

    impl ExportReporter for RecordingReporter {
        fn on_start(&mut self, total: usize) {
            self.total = Some(total);
        }
        fn on_export(&mut self, _index: usize, job: &ExportJob) {
            self.seen.push(job.out_name.clone());
        }
        fn on_finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn list_reports_matching_tags_without_exporting() {
        let runner = MockInkscapeRunner::new().with_query_output(QUERY);
        let cfg = config(ConfigOptions { list: true, ..Default::default() });

        let outcome = run_action(&runner, &cfg, &mut NullReporter).unwrap();
        match outcome {
            RunOutcome::Listed(tags) => assert_eq!(tags, vec!["EXPORT_box", "EXPORT_circle"]),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(runner.get_received_calls().len(), 1);
        assert!(runner.received_action_scripts().is_empty());
    }

    #[test]
    fn export_all_exports_each_match_in_order() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("pdfs").to_string_lossy().into_owned();
        let runner = MockInkscapeRunner::new().with_query_output(QUERY);
        let cfg = config(ConfigOptions {
            all: true,
            output: Some(out.clone()),
            ..Default::default()
        });
        let mut reporter = RecordingReporter::default();

        let summary = match run_action(&runner, &cfg, &mut reporter).unwrap() {
            RunOutcome::Exported(summary) => summary,
            other => panic!("unexpected outcome: {other:?}"),
        };

        assert_eq!(
            summary.exported,
            vec![
                PathBuf::from(format!("{out}/box.pdf")),
                PathBuf::from(format!("{out}/circle.pdf")),
            ]
        );
        assert_eq!(reporter.total, Some(2));
        assert_eq!(reporter.seen, vec!["box", "circle"]);
        assert!(reporter.finished);
        assert!(dir.path().join("pdfs").is_dir(), "output directory is created");

        let scripts = runner.received_action_scripts();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].starts_with("select-by-id:EXPORT_box;"));
        assert!(scripts[1].starts_with("select-by-id:EXPORT_circle;"));
    }

    #[test]
    fn export_all_stops_at_first_failure() {
        let dir = tempdir().unwrap();
        let runner = MockInkscapeRunner::new().with_query_output(QUERY);
        runner.push_batch_exit_codes(&[1]);
        let cfg = config(ConfigOptions {
            all: true,
            output: Some(dir.path().to_string_lossy().into_owned()),
            ..Default::default()
        });
        let mut reporter = RecordingReporter::default();

        let err = run_action(&runner, &cfg, &mut reporter).unwrap_err();
        assert!(matches!(err, CoreError::ExportFailed { ref tag, .. } if tag == "EXPORT_box"));
        // Query + the one failed export; "circle" is never attempted.
        assert_eq!(runner.get_received_calls().len(), 2);
        assert!(!reporter.finished);
    }

    #[test]
    fn export_all_checks_every_identifier_before_exporting() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("pdfs").to_string_lossy().into_owned();
        let runner = MockInkscapeRunner::new()
            .with_query_output("EXPORT_box,0,0,1,1\nEXPORT_a;export-do,0,0,1,1\n");
        let cfg = config(ConfigOptions {
            all: true,
            output: Some(out),
            ..Default::default()
        });

        let err = run_action(&runner, &cfg, &mut NullReporter).unwrap_err();
        assert!(matches!(err, CoreError::ActionSeparator { ref value, .. } if value == "EXPORT_a;export-do"));
        // Only the query ran; "box" was not exported either.
        assert_eq!(runner.get_received_calls().len(), 1);
        assert!(!dir.path().join("pdfs").exists());
    }

    #[test]
    fn export_all_with_no_matches_runs_no_exports() {
        let dir = tempdir().unwrap();
        let runner = MockInkscapeRunner::new().with_query_output("OTHER_x,0,0,1,1\n");
        let out = dir.path().join("never").to_string_lossy().into_owned();
        let cfg = config(ConfigOptions {
            all: true,
            output: Some(out),
            ..Default::default()
        });

        let outcome = run_action(&runner, &cfg, &mut NullReporter).unwrap();
        assert!(matches!(outcome, RunOutcome::Exported(ref s) if s.exported.is_empty()));
        assert!(!dir.path().join("never").exists());
    }

    #[test]
    fn export_one_selects_prefixed_identifier() {
        let dir = tempdir().unwrap();
        let out = dir.path().to_string_lossy().into_owned();
        let runner = MockInkscapeRunner::new();
        let cfg = config(ConfigOptions {
            export: true,
            tag: Some("box".to_string()),
            output: Some(out.clone()),
            ..Default::default()
        });

        let outcome = run_action(&runner, &cfg, &mut NullReporter).unwrap();
        let RunOutcome::Exported(summary) = outcome else {
            panic!("expected an export summary");
        };
        assert_eq!(summary.exported, vec![PathBuf::from(format!("{out}/box.pdf"))]);

        // No query is needed for a single named export.
        let calls = runner.get_received_calls();
        assert_eq!(calls.len(), 1);
        let scripts = runner.received_action_scripts();
        assert!(scripts[0].starts_with("select-by-id:EXPORT_box;"));
        assert!(scripts[0].contains(&format!("export-filename:{out}/box.pdf;")));
    }

    #[test]
    fn export_one_with_empty_prefix_uses_bare_tag() {
        let dir = tempdir().unwrap();
        let runner = MockInkscapeRunner::new();
        let cfg = config(ConfigOptions {
            export: true,
            prefix: Some(String::new()),
            tag: Some("box".to_string()),
            output: Some(dir.path().to_string_lossy().into_owned()),
            ..Default::default()
        });

        run_action(&runner, &cfg, &mut NullReporter).unwrap();
        assert!(runner.received_action_scripts()[0].starts_with("select-by-id:box;"));
    }
}
