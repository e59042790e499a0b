//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::LoggingConfig;
use crate::config::validation::validate_config;
use crate::error::ConfigError;

/// Load and validate a logging configuration from a TOML file.
///
/// Any failure here is fatal for startup: a missing or malformed logging
/// configuration means the process cannot report its own problems.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: LoggingConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
