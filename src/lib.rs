//! Collapse merge-conflict blocks to their incoming side.
//!
//! [`resolve::resolve_text`] is the pure scanner; [`resolver::resolve_file`]
//! applies it to one file on disk; [`run::run`] drives a configured list.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod resolve;
pub mod resolver;
pub mod run;

#[cfg(test)]
mod test_support;
