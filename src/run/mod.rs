//! Orchestration over a configured list of files.
//!
//! Files are processed one at a time in list order. The first fatal error
//! stops the run and later files are left untouched.

pub mod display;


use crate::error::Result;
use crate::resolver::{FileOutcome, ResolveOptions, resolve_file};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Outcome for one listed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub entries: Vec<FileReport>,
}

impl RunReport {
    pub fn resolved(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Resolved { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NoConflict))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Resolve each file in `files`, calling `on_file` as soon as each one is done.
///
/// `on_file` runs before the next file is touched, so status output for
/// earlier files is emitted even if a later file fails.
pub fn run<F>(files: &[PathBuf], options: &ResolveOptions, mut on_file: F) -> Result<RunReport>
where
    F: FnMut(&FileReport) -> Result<()>,
{
    let mut report = RunReport::default();

    for path in files {
        let outcome = resolve_file(path, options)?;
        let entry = FileReport {
            path: path.clone(),
            outcome,
        };
        on_file(&entry)?;
        report.entries.push(entry);
    }

    debug!(
        resolved = report.resolved(),
        skipped = report.skipped(),
        unchanged = report.unchanged(),
        "run complete"
    );

    Ok(report)
}
