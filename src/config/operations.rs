//! Config loading and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{ResolveError, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ResolveError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Load `dir/.resolve-conflicts.yaml` if it exists, otherwise defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ResolveError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ResolveError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validation rules:
    /// - `files` must not be empty
    /// - no entry may be an empty path
    /// - no entry may appear twice
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(ResolveError::Config(
                "config validation failed: files must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.as_os_str().is_empty() {
                return Err(ResolveError::Config(
                    "config validation failed: files entries must be non-empty".to_string(),
                ));
            }
            if !seen.insert(file) {
                return Err(ResolveError::Config(format!(
                    "config validation failed: '{}' is listed more than once",
                    file.display()
                )));
            }
        }

        Ok(())
    }
}
