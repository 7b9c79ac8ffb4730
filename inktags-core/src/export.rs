// ============================================================================
// inktags-core/src/export.rs
// ============================================================================
//
// EXPORT: Single-Element PDF Export through Inkscape Batch Mode
//
// An export selects one element by identifier, fits the canvas to it and
// exports the page area to `<output_dir><base_name>.pdf`. The verbs are sent
// to Inkscape as a `;`-joined action script, so neither the identifier nor
// the export path may contain `;`.
//
// KEY COMPONENTS:
// - ActionScript: ordered list of Inkscape action verbs
// - ExportJob: (identifier, base name, output directory) for one export
// - export_by_tag: builds the script for a job and runs it

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CoreResult, action_separator_error, export_failed_error};
use crate::external::{InkscapeRunner, Invocation};

/// Separator between verbs of an action script.
pub const ACTION_SEPARATOR: char = ';';

/// Appends `/` to `dir` unless it already ends with one.
#[must_use]
pub fn append_trailing_slash(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

// ============================================================================
// ACTION SCRIPT
// ============================================================================

/// One verb of an Inkscape `--actions` script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionVerb {
    SelectById(String),
    FitCanvasToSelection,
    EditDelete,
    ExportFilename(String),
    ExportAreaPage,
    ExportDo,
}

impl fmt::Display for ActionVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionVerb::SelectById(id) => write!(f, "select-by-id:{id}"),
            ActionVerb::FitCanvasToSelection => f.write_str("FitCanvasToSelection"),
            ActionVerb::EditDelete => f.write_str("EditDelete"),
            ActionVerb::ExportFilename(path) => write!(f, "export-filename:{path}"),
            ActionVerb::ExportAreaPage => f.write_str("export-area-page"),
            ActionVerb::ExportDo => f.write_str("export-do"),
        }
    }
}

/// An ordered action script, rendered with `;` between verbs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionScript(Vec<ActionVerb>);

impl ActionScript {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, verb: ActionVerb) -> Self {
        self.0.push(verb);
        self
    }

    pub fn verbs(&self) -> &[ActionVerb] {
        &self.0
    }

    /// Script exporting the element `id` as a page-fit PDF at `export_path`.
    ///
    /// Fails with `ActionSeparator` when either argument contains `;`.
    ///
    /// NOTE: `EditDelete` runs right after the canvas is fitted, which removes
    /// the selected element itself before the export. The sequence is kept
    /// as-is because existing drawings were prepared against it.
    pub fn export_element(id: &str, export_path: &str) -> CoreResult<Self> {
        let id = script_argument("Element id", id)?;
        let export_path = script_argument("Export path", export_path)?;
        Ok(Self::new()
            .then(ActionVerb::SelectById(id.to_string()))
            .then(ActionVerb::FitCanvasToSelection)
            .then(ActionVerb::EditDelete)
            .then(ActionVerb::ExportFilename(export_path.to_string()))
            .then(ActionVerb::ExportAreaPage)
            .then(ActionVerb::ExportDo))
    }
}

fn script_argument<'a>(what: &'static str, value: &'a str) -> CoreResult<&'a str> {
    if value.contains(ACTION_SEPARATOR) {
        return Err(action_separator_error(what, value));
    }
    Ok(value)
}

impl fmt::Display for ActionScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, verb) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{verb}")?;
        }
        Ok(())
    }
}

// ============================================================================
// EXPORT JOB
// ============================================================================

/// One element to export and where its PDF goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    /// Identifier passed to `select-by-id`
    pub tag: String,
    /// File name of the PDF without extension
    pub out_name: String,
    /// Output directory, always ending in `/`
    pub out_dir: String,
}

impl ExportJob {
    pub fn new(tag: impl Into<String>, out_name: impl Into<String>, out_dir: &str) -> Self {
        Self {
            tag: tag.into(),
            out_name: out_name.into(),
            out_dir: append_trailing_slash(out_dir),
        }
    }

    /// Job for an identifier matched by `prefix`: the base name is the
    /// identifier with the first `prefix.len()` bytes removed.
    pub fn from_prefixed(tag: &str, prefix: &str, out_dir: &str) -> Self {
        let out_name = tag.get(prefix.len()..).unwrap_or_default();
        Self::new(tag, out_name, out_dir)
    }

    /// `<out_dir><out_name>.pdf`
    #[must_use]
    pub fn export_path(&self) -> String {
        format!("{}{}.pdf", self.out_dir, self.out_name)
    }

    pub fn action_script(&self) -> CoreResult<ActionScript> {
        ActionScript::export_element(&self.tag, &self.export_path())
    }
}

/// Runs one export and returns the path of the PDF Inkscape was told to write.
///
/// Any non-zero exit is an error naming the identifier and the command line.
pub fn export_by_tag<R: InkscapeRunner>(
    runner: &R,
    executable: &Path,
    input: &Path,
    job: &ExportJob,
) -> CoreResult<PathBuf> {
    debug!("Exporting \"{}\" as \"{}.pdf\"", job.tag, job.out_name);

    let script = job.action_script()?.to_string();
    let invocation = Invocation::batch_actions(executable, input, &script);

    let output = runner.run(&invocation)?;
    if !output.success() {
        return Err(export_failed_error(
            &job.tag,
            invocation.command_line(),
            output.status_display(),
        ));
    }

    Ok(PathBuf::from(job.export_path()))
}
