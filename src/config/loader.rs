use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::config::PlaneConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

impl PlaneConfig {
    /// Loads and validates a profile from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml(&contents)?;
        debug!(name = %config.name, path = %path.as_ref().display(), "loaded aircraft profile");
        Ok(config)
    }

    /// Parses and validates a profile from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: PlaneConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}
