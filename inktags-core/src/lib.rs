//! Core library for exporting tagged elements of Inkscape drawings.
//!
//! The library queries element identifiers with `inkscape --query-all`,
//! keeps the ones starting with a prefix, and exports each as a page-fit PDF
//! through Inkscape's batch action mode.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use inktags_core::{ConfigOptions, CoreConfig, NullReporter, ProcessRunner, RunOutcome, run_action};
//!
//! let config = CoreConfig::from_options(ConfigOptions {
//!     input: Some("drawing.svg".to_string()),
//!     output: Some("pdfs".to_string()),
//!     all: true,
//!     executable: Some("/usr/bin/inkscape".to_string()),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! match run_action(&ProcessRunner::new(), &config, &mut NullReporter).unwrap() {
//!     RunOutcome::Exported(summary) => println!("{} PDF(s) written", summary.exported.len()),
//!     RunOutcome::Listed(tags) => println!("{tags:?}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod external;
pub mod processing;
pub mod tags;
pub mod utils;

// Re-exports for public API
pub use config::{Action, ConfigOptions, CoreConfig, DEFAULT_PREFIX, EXECUTABLE_ENV_VAR};
pub use error::{CoreError, CoreResult};
pub use export::{ActionScript, ActionVerb, ExportJob, append_trailing_slash, export_by_tag};
pub use external::{InkscapeRunner, Invocation, ProcessRunner, RunOutput};
pub use processing::{
    ExportReporter, ExportSummary, NullReporter, RunOutcome, run_action, run_export_all,
    run_export_one, run_list,
};
pub use tags::{filter_by_prefix, list_filtered_tags, list_tags, parse_query_output};
pub use utils::format_duration;
