//! In-memory capture sink for tests.

use std::sync::{Arc, Mutex};

use crate::handler::Handler;
use crate::record::{Level, Record};

/// Captures every accepted record in memory.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to a channel.
#[derive(Clone)]
pub struct MemoryHandler {
    records: Arc<Mutex<Vec<Record>>>,
    level: Level,
}

impl Default for MemoryHandler {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl MemoryHandler {
    pub fn new(level: Level) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            level,
        }
    }

    /// Snapshot of the captured records.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured records.
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl Handler for MemoryHandler {
    fn handle(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record.clone());
        }
    }

    fn level(&self) -> Level {
        self.level
    }
}
