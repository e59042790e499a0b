//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (channels reference existing handlers
//!   and processors)
//! - Require the `app` channel, the inheritance source for everything else
//! - Check the timezone is a known IANA name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the registry

use thiserror::Error;

use crate::config::schema::{HandlerConfig, LoggingConfig};
use crate::registry::APP_CHANNEL;

/// A single semantic violation in a logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("channel '{APP_CHANNEL}' is not defined")]
    MissingAppChannel,

    #[error("channel '{channel}' references unknown handler '{handler}'")]
    UnknownHandler { channel: String, handler: String },

    #[error("channel '{channel}' references unknown processor '{processor}'")]
    UnknownProcessor { channel: String, processor: String },

    #[error("channel '{channel}' lists handler '{handler}' more than once")]
    DuplicateHandler { channel: String, handler: String },

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("file handler '{0}' has an empty path")]
    EmptyFilePath(String),
}

/// Validate a logging configuration, collecting every violation.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timezone.parse::<chrono_tz::Tz>().is_err() {
        errors.push(ValidationError::UnknownTimezone(config.timezone.clone()));
    }

    if !config.channels.contains_key(APP_CHANNEL) {
        errors.push(ValidationError::MissingAppChannel);
    }

    for (name, handler) in &config.handlers {
        if let HandlerConfig::File { path, .. } = handler {
            if path.is_empty() {
                errors.push(ValidationError::EmptyFilePath(name.clone()));
            }
        }
    }

    for (channel, definition) in &config.channels {
        for (i, handler) in definition.handlers.iter().enumerate() {
            if !config.handlers.contains_key(handler) {
                errors.push(ValidationError::UnknownHandler {
                    channel: channel.clone(),
                    handler: handler.clone(),
                });
            }
            if definition.handlers[..i].contains(handler) {
                errors.push(ValidationError::DuplicateHandler {
                    channel: channel.clone(),
                    handler: handler.clone(),
                });
            }
        }
        for processor in &definition.processors {
            if !config.processors.contains_key(processor) {
                errors.push(ValidationError::UnknownProcessor {
                    channel: channel.clone(),
                    processor: processor.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
