//! Status line formatting for run output.

use super::FileReport;
use crate::error::Result;
use crate::resolver::FileOutcome;

/// Human-readable status line for one file.
pub fn status_line(entry: &FileReport) -> String {
    let path = entry.path.display();
    match entry.outcome {
        FileOutcome::Skipped => format!("Skipping {}, not found.", path),
        FileOutcome::Resolved { written: true, .. } => {
            format!("Resolving {} by keeping incoming changes.", path)
        }
        FileOutcome::Resolved { written: false, .. } => {
            format!("Would resolve {} by keeping incoming changes.", path)
        }
        FileOutcome::NoConflict => format!("No conflict markers found in {}.", path),
    }
}

/// One-line JSON object for one file.
pub fn json_line(entry: &FileReport) -> Result<String> {
    Ok(serde_json::to_string(entry)?)
}
