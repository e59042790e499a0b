//! Append-only file sink.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::handler::{Format, Handler};
use crate::record::{Level, Record};

/// Appends rendered records to a file.
///
/// The writer is flushed after every record so a crashing process does not
/// lose the records that led up to the crash.
pub struct FileHandler {
    writer: Mutex<BufWriter<File>>,
    level: Level,
    format: Format,
}

impl FileHandler {
    /// Open `path` for appending, creating it if absent.
    pub fn open(path: impl AsRef<Path>, level: Level, format: Format) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            level,
            format,
        })
    }
}

impl Handler for FileHandler {
    fn handle(&self, record: &Record) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", self.format.render(record));
            let _ = writer.flush();
        }
    }

    fn level(&self) -> Level {
        self.level
    }
}
