//! Config struct definition and defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".resolve-conflicts.yaml";

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Files to resolve, in processing order. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_files")]
    pub files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: default_files(),
        }
    }
}

pub(super) fn default_files() -> Vec<PathBuf> {
    ["index.html", "script.js", "styles.css"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}
