//! Configuration for resolve-conflicts.
//!
//! The list of files to resolve is configuration handed to the run, not
//! process state. Without a config file the fixed deployment list is used.
//! An optional `.resolve-conflicts.yaml` in the working directory, or a file
//! given with `--config`, replaces it. Unknown fields are ignored.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config};
