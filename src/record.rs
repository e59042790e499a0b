//! Log records and severity levels.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Log severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl Level {
    /// Lowercase name, matching the configuration format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A single log record as seen by processors and handlers.
///
/// The timestamp is taken in the channel's configured timezone at creation
/// time. Processors enrich `fields`; handlers only read.
#[derive(Debug, Clone)]
pub struct Record {
    /// Name of the channel that produced the record.
    pub channel: String,

    /// Severity of the record.
    pub level: Level,

    /// Human-readable message.
    pub message: String,

    /// Creation time in the channel timezone.
    pub timestamp: DateTime<Tz>,

    /// Structured extras (processor output, caller-supplied context).
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create a record stamped with the current time in `timezone`.
    pub fn new(
        channel: impl Into<String>,
        level: Level,
        message: impl Into<String>,
        timezone: Tz,
    ) -> Self {
        Self {
            channel: channel.into(),
            level,
            message: message.into(),
            timestamp: Utc::now().with_timezone(&timezone),
            fields: BTreeMap::new(),
        }
    }
}
