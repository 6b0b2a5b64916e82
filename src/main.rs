//! resolve-conflicts: collapse merge-conflict blocks to the incoming side.
//!
//! Parses arguments, sets up logging, runs the resolver over the configured
//! file list, and maps errors to exit codes.

use resolve_conflicts::cli::Cli;
use resolve_conflicts::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
