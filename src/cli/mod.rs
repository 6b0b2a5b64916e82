//! CLI argument parsing for resolve-conflicts.
//!
//! Uses clap derive macros. Running with no arguments resolves the
//! configured file list in place.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Resolve merge-conflict markers by keeping the incoming side.
///
/// For each configured file, every block between `<<<<<<<` and `>>>>>>>`
/// is replaced by the lines between `=======` and `>>>>>>>`. Content
/// outside conflict blocks is kept. Missing files are skipped.
#[derive(Parser, Debug)]
#[command(name = "resolve-conflicts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file listing the files to resolve.
    ///
    /// Defaults to `.resolve-conflicts.yaml` in the working directory if it
    /// exists, otherwise index.html, script.js and styles.css.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report what would be resolved without rewriting any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Print one JSON object per file instead of a status line.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress per-file status output.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
