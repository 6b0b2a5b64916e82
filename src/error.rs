//! Error types for resolve-conflicts.
//!
//! A listed file that does not exist is not an error; it is reported as
//! skipped. Everything here is fatal for the remainder of the run.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for resolver operations.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Config file unreadable, unparsable, or invalid.
    #[error("{0}")]
    Config(String),

    /// A listed file exists but could not be read as UTF-8 text.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resolved content could not be written back.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A per-file report could not be encoded as JSON.
    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

impl ResolveError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResolveError::Config(_) => exit_codes::CONFIG_ERROR,
            ResolveError::Read { .. } | ResolveError::Write { .. } | ResolveError::Report(_) => {
                exit_codes::IO_FAILURE
            }
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ResolveError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
