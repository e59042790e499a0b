//! Stdout/stderr sink.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::handler::{Format, Handler};
use crate::record::{Level, Record};

/// Which standard stream to write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTarget {
    Stdout,
    #[default]
    Stderr,
}

/// Writes rendered records to stdout or stderr.
#[derive(Debug)]
pub struct StreamHandler {
    target: StreamTarget,
    level: Level,
    format: Format,
}

impl StreamHandler {
    pub fn new(target: StreamTarget, level: Level, format: Format) -> Self {
        Self {
            target,
            level,
            format,
        }
    }
}

impl Handler for StreamHandler {
    fn handle(&self, record: &Record) {
        let line = self.format.render(record);
        match self.target {
            StreamTarget::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{}", line);
            }
            StreamTarget::Stderr => {
                let _ = writeln!(std::io::stderr().lock(), "{}", line);
            }
        }
    }

    fn level(&self) -> Level {
        self.level
    }
}
