//! Error types for configuration loading and channel lookup.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors raised while loading or applying a logging configuration.
///
/// Any of these is fatal at startup: a process cannot trust its own logging
/// to report a broken logging setup, so the caller should abort.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantic validation failed; all violations are reported.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A configured handler could not be constructed (e.g. log file
    /// could not be opened).
    #[error("handler '{name}' could not be constructed: {source}")]
    Handler {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised by registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No channel with this name is registered.
    #[error("unknown log channel '{0}'")]
    UnknownChannel(String),
}
