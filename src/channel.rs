//! Named log channels.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono_tz::Tz;
use serde_json::Value;

use crate::handler::Handler;
use crate::processor::Processor;
use crate::record::{Level, Record};

/// A named logger with an ordered list of handlers and processors.
///
/// Logging is synchronous and infallible: processors run in order, then the
/// record is offered to every handler whose level threshold admits it.
pub struct Channel {
    name: String,
    handlers: Vec<Arc<dyn Handler>>,
    processors: Vec<Arc<dyn Processor>>,
    timezone: Tz,
}

impl Channel {
    pub fn new(
        name: impl Into<String>,
        handlers: Vec<Arc<dyn Handler>>,
        processors: Vec<Arc<dyn Processor>>,
        timezone: Tz,
    ) -> Self {
        Self {
            name: name.into(),
            handlers,
            processors,
            timezone,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handlers(&self) -> &[Arc<dyn Handler>] {
        &self.handlers
    }

    pub fn processors(&self) -> &[Arc<dyn Processor>] {
        &self.processors
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Log a message at the given level.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.log_with(level, message, BTreeMap::new());
    }

    /// Log a message with caller-supplied structured fields.
    pub fn log_with(
        &self,
        level: Level,
        message: impl Into<String>,
        fields: BTreeMap<String, Value>,
    ) {
        let mut record = Record::new(&self.name, level, message, self.timezone);
        record.fields = fields;

        for processor in &self.processors {
            processor.process(&mut record);
        }
        for handler in &self.handlers {
            if handler.is_handling(level) {
                handler.handle(&record);
            }
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log(Level::Trace, message);
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .field("processors", &self.processors.len())
            .field("timezone", &self.timezone)
            .finish()
    }
}
