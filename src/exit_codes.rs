//! Exit code constants for the resolve-conflicts CLI.
//!
//! - 0: Success (every listed file was resolved, skipped, or already clean)
//! - 1: Configuration error (unreadable or invalid config file)
//! - 2: I/O failure while reading or rewriting a listed file

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration could not be loaded or failed validation.
pub const CONFIG_ERROR: i32 = 1;

/// A listed file existed but could not be read or rewritten.
pub const IO_FAILURE: i32 = 2;
