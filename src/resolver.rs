//! Per-file resolution: read, scan, rewrite.

use crate::error::{ResolveError, Result};
use crate::fs::overwrite_in_place;
use crate::resolve::resolve_text;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Options that apply to every file in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Scan and report, but never write.
    pub dry_run: bool,
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// At least one conflict was found and collapsed to the incoming side.
    Resolved {
        conflicts: usize,
        lines_dropped: usize,
        /// False on a dry run.
        written: bool,
    },
    /// The path does not exist. Nothing was read or written.
    Skipped,
    /// No start marker; the file was left untouched.
    NoConflict,
}

/// Resolve every conflict in the file at `path`, keeping the incoming side.
///
/// A missing file is skipped rather than treated as an error. The file is
/// only rewritten when a start marker was found. Read and write failures
/// are fatal.
pub fn resolve_file(path: &Path, options: &ResolveOptions) -> Result<FileOutcome> {
    if !path.exists() {
        debug!(path = %path.display(), "file not found, skipping");
        return Ok(FileOutcome::Skipped);
    }

    let text = std::fs::read_to_string(path).map_err(|source| ResolveError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let resolution = resolve_text(&text);
    if !resolution.found_conflict {
        debug!(path = %path.display(), "no conflict markers");
        return Ok(FileOutcome::NoConflict);
    }

    if resolution.is_unterminated() {
        warn!(
            path = %path.display(),
            region = ?resolution.final_region,
            "file ends inside a conflict block; trailing lines follow the open region"
        );
    }

    debug!(
        path = %path.display(),
        conflicts = resolution.conflicts,
        kept = resolution.lines_kept,
        dropped = resolution.lines_dropped,
        "resolved conflicts"
    );

    let written = !options.dry_run;
    if written {
        overwrite_in_place(path, resolution.content.as_bytes())?;
    }

    Ok(FileOutcome::Resolved {
        conflicts: resolution.conflicts,
        lines_dropped: resolution.lines_dropped,
        written,
    })
}
