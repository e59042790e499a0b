//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the logging
//! registry. All types derive Serde traits for deserialization from config
//! files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::handler::{Format, StreamTarget};
use crate::record::Level;

/// Root configuration for the logging registry.
///
/// Handlers and processors are declared once under their own names; channels
/// reference them, so several channels can share one sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// IANA timezone name applied to every record timestamp.
    pub timezone: String,

    /// Named output sinks.
    pub handlers: BTreeMap<String, HandlerConfig>,

    /// Named record enrichers.
    pub processors: BTreeMap<String, ProcessorConfig>,

    /// Channel definitions wiring handlers and processors together.
    /// Must include the `app` channel; baseline channels inherit from it.
    pub channels: BTreeMap<String, ChannelConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            handlers: BTreeMap::new(),
            processors: BTreeMap::new(),
            channels: BTreeMap::new(),
        }
    }
}

/// A single output sink definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HandlerConfig {
    /// Write to stdout or stderr.
    Stream {
        #[serde(default)]
        target: StreamTarget,

        #[serde(default = "default_level")]
        level: Level,

        #[serde(default)]
        format: Format,
    },

    /// Append to a file.
    File {
        /// Path to the log file (created if absent).
        path: String,

        #[serde(default = "default_level")]
        level: Level,

        #[serde(default)]
        format: Format,
    },
}

fn default_level() -> Level {
    Level::Trace
}

/// A single record enricher definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProcessorConfig {
    /// Add the process id as field `pid`.
    Pid,

    /// Add a per-record UUID v4 as field `uid`.
    Uid,

    /// Add fixed key/value tags.
    Tags {
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
}

/// A channel definition referencing handlers and processors by name.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ChannelConfig {
    /// Handler names, in dispatch order.
    pub handlers: Vec<String>,

    /// Processor names, in application order.
    pub processors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: LoggingConfig = toml::from_str(
            r#"
            timezone = "Europe/Tallinn"

            [handlers.stderr]
            type = "stream"
            target = "stderr"
            level = "info"

            [handlers.errors]
            type = "file"
            path = "log/errors.log"
            level = "error"
            format = "json"

            [processors.pid]
            type = "pid"

            [processors.tags]
            type = "tags"
            tags = { env = "prod" }

            [channels.app]
            handlers = ["stderr", "errors"]
            processors = ["pid", "tags"]
            "#,
        )
        .unwrap();

        assert_eq!(config.timezone, "Europe/Tallinn");
        assert_eq!(config.handlers.len(), 2);
        assert_eq!(config.channels["app"].handlers, vec!["stderr", "errors"]);
        match &config.handlers["errors"] {
            HandlerConfig::File { path, level, format } => {
                assert_eq!(path, "log/errors.log");
                assert_eq!(*level, Level::Error);
                assert_eq!(*format, Format::Json);
            }
            other => panic!("expected file handler, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config: LoggingConfig = toml::from_str(
            r#"
            [handlers.out]
            type = "stream"

            [channels.app]
            handlers = ["out"]
            "#,
        )
        .unwrap();

        assert_eq!(config.timezone, "UTC");
        match &config.handlers["out"] {
            HandlerConfig::Stream { target, level, format } => {
                assert_eq!(*target, StreamTarget::Stderr);
                assert_eq!(*level, Level::Trace);
                assert_eq!(*format, Format::Line);
            }
            other => panic!("expected stream handler, got {:?}", other),
        }
        assert!(config.channels["app"].processors.is_empty());
    }
}
