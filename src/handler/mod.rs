//! Output sinks for log records.
//!
//! # Responsibilities
//! - Define the `Handler` trait every sink implements
//! - Render records as text (line or JSON)
//! - Construct sinks from configuration entries
//!
//! # Design Decisions
//! - Handlers are shared as `Arc<dyn Handler>` so channels can inherit a
//!   sink list by reference
//! - Each handler carries its own level threshold; the channel offers every
//!   record and the handler decides
//! - Write errors are swallowed at dispatch time: a logger cannot log its
//!   own sink failures. File-open errors surface at construction instead.

pub mod file;
pub mod memory;
pub mod stream;

pub use file::FileHandler;
pub use memory::MemoryHandler;
pub use stream::{StreamHandler, StreamTarget};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::schema::HandlerConfig;
use crate::error::ConfigError;
use crate::record::{Level, Record};

/// A sink that receives finalized log records.
pub trait Handler: Send + Sync {
    /// Write the record to the sink.
    fn handle(&self, record: &Record);

    /// Minimum level this handler accepts.
    fn level(&self) -> Level;

    /// Returns true if a record at `level` would be written.
    fn is_handling(&self, level: Level) -> bool {
        level >= self.level()
    }
}

/// On-disk rendering of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `[timestamp] channel.LEVEL: message {fields}`
    #[default]
    Line,
    /// One JSON object per line.
    Json,
}

impl Format {
    /// Render a record to a single line (no trailing newline).
    pub fn render(&self, record: &Record) -> String {
        match self {
            Format::Line => {
                let mut line = format!(
                    "[{}] {}.{}: {}",
                    record.timestamp.format("%Y-%m-%d %H:%M:%S%.3f %:z"),
                    record.channel,
                    record.level.as_str().to_ascii_uppercase(),
                    record.message,
                );
                if !record.fields.is_empty() {
                    let fields = json!(record.fields);
                    line.push(' ');
                    line.push_str(&fields.to_string());
                }
                line
            }
            Format::Json => {
                let mut object = json!({
                    "timestamp": record.timestamp.to_rfc3339(),
                    "channel": record.channel,
                    "level": record.level.as_str(),
                    "message": record.message,
                });
                if !record.fields.is_empty() {
                    object["fields"] = json!(record.fields);
                }
                object.to_string()
            }
        }
    }
}

/// Construct a handler from its configuration entry.
///
/// `name` is the handler's key in the configuration, used in error reports.
pub fn build_handler(name: &str, config: &HandlerConfig) -> Result<Arc<dyn Handler>, ConfigError> {
    match config {
        HandlerConfig::Stream {
            target,
            level,
            format,
        } => Ok(Arc::new(StreamHandler::new(*target, *level, *format))),
        HandlerConfig::File {
            path,
            level,
            format,
        } => {
            let handler =
                FileHandler::open(path, *level, *format).map_err(|source| ConfigError::Handler {
                    name: name.to_string(),
                    source,
                })?;
            Ok(Arc::new(handler))
        }
    }
}
