//! Command implementations for resolve-conflicts.

mod resolve;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    resolve::cmd_resolve(&cli)
}
