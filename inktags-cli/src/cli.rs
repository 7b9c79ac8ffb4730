// inktags-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use std::ffi::OsString;

use clap::Parser;
use inktags_core::{ConfigOptions, DEFAULT_PREFIX, EXECUTABLE_ENV_VAR};

/// Single-dash spelling of the executable flag accepted for older scripts.
pub const LEGACY_EXECUTABLE_FLAG: &str = "-exe";

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "inktags: export tagged Inkscape elements as PDFs",
    long_about = "Lists the element ids of an Inkscape drawing that start with a prefix, \
                  and exports each tagged element as a page-fit PDF through Inkscape's \
                  batch action mode. Exactly one of --export, --list or --all is required."
)]
pub struct Cli {
    /// Identifier prefix marking export candidates (stripped from output names)
    #[arg(short, long, default_value = DEFAULT_PREFIX, value_name = "PREFIX")]
    pub prefix: String,

    /// Inkscape drawing to read
    #[arg(short, long, value_name = "SVG_FILE")]
    pub input: Option<String>,

    /// Directory where PDFs are written
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: Option<String>,

    /// Tag to export with --export, without the prefix
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Export every element whose id starts with the prefix
    #[arg(short, long)]
    pub all: bool,

    /// List every element id that starts with the prefix
    #[arg(short, long)]
    pub list: bool,

    /// Export the single element PREFIX+TAG
    #[arg(short = 'x', long)]
    pub export: bool,

    /// Path to the inkscape executable (also accepted as -exe)
    #[arg(
        short = 'e',
        long = "inkscape-executable",
        visible_alias = "exe",
        env = EXECUTABLE_ENV_VAR,
        value_name = "PATH"
    )]
    pub inkscape_executable: Option<String>,

    /// Print the listed tags as a JSON array (with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Copies the flag values into the core's unvalidated options record.
    pub fn to_options(&self) -> ConfigOptions {
        ConfigOptions {
            prefix: Some(self.prefix.clone()),
            input: self.input.clone(),
            output: self.output.clone(),
            tag: self.tag.clone(),
            export: self.export,
            list: self.list,
            all: self.all,
            executable: self.inkscape_executable.clone(),
            verbose: self.verbose,
        }
    }
}

/// Rewrites the legacy `-exe PATH` / `-exe=PATH` spellings to the long flag,
/// which clap cannot express as a short option.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(LEGACY_EXECUTABLE_FLAG) => OsString::from("--inkscape-executable"),
            Some(s) => match s.strip_prefix("-exe=") {
                Some(path) => OsString::from(format!("--inkscape-executable={path}")),
                None => arg,
            },
            None => arg,
        })
        .collect()
}
