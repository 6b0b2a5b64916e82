//! The resolve command: load config, run, print status.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::resolver::ResolveOptions;
use crate::run::display::{json_line, status_line};
use crate::run::{FileReport, RunReport, run};
use std::path::Path;

pub fn cmd_resolve(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };

    let options = ResolveOptions {
        dry_run: cli.dry_run,
    };

    execute(&config, &options, |entry| {
        if cli.quiet {
            return Ok(());
        }
        let line = if cli.json {
            json_line(entry)?
        } else {
            status_line(entry)
        };
        println!("{}", line);
        Ok(())
    })?;

    Ok(())
}

/// Run over `config.files`, handing each finished file to `emit`.
fn execute<F>(config: &Config, options: &ResolveOptions, emit: F) -> Result<RunReport>
where
    F: FnMut(&FileReport) -> Result<()>,
{
    config.validate()?;
    run(&config.files, options, emit)
}
