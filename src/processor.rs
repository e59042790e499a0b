//! Record enrichers, applied before handler dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::config::schema::ProcessorConfig;
use crate::record::Record;

/// Mutates a record before it reaches the handlers.
pub trait Processor: Send + Sync {
    fn process(&self, record: &mut Record);
}

/// Adds the process id as field `pid`.
#[derive(Debug, Default)]
pub struct PidProcessor;

impl Processor for PidProcessor {
    fn process(&self, record: &mut Record) {
        record
            .fields
            .insert("pid".to_string(), json!(std::process::id()));
    }
}

/// Adds a fresh UUID v4 as field `uid`, correlating one record across
/// multiple sinks.
#[derive(Debug, Default)]
pub struct UidProcessor;

impl Processor for UidProcessor {
    fn process(&self, record: &mut Record) {
        record
            .fields
            .insert("uid".to_string(), json!(Uuid::new_v4().to_string()));
    }
}

/// Adds a fixed set of key/value tags from configuration.
#[derive(Debug)]
pub struct TagsProcessor {
    tags: BTreeMap<String, String>,
}

impl TagsProcessor {
    pub fn new(tags: BTreeMap<String, String>) -> Self {
        Self { tags }
    }
}

impl Processor for TagsProcessor {
    fn process(&self, record: &mut Record) {
        for (key, value) in &self.tags {
            record.fields.insert(key.clone(), json!(value));
        }
    }
}

/// Construct a processor from its configuration entry.
pub fn build_processor(config: &ProcessorConfig) -> Arc<dyn Processor> {
    match config {
        ProcessorConfig::Pid => Arc::new(PidProcessor),
        ProcessorConfig::Uid => Arc::new(UidProcessor),
        ProcessorConfig::Tags { tags } => Arc::new(TagsProcessor::new(tags.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    fn blank_record() -> Record {
        Record::new("app", Level::Info, "message", chrono_tz::UTC)
    }

    #[test]
    fn test_pid_processor() {
        let mut record = blank_record();
        PidProcessor.process(&mut record);
        assert_eq!(record.fields["pid"], json!(std::process::id()));
    }

    #[test]
    fn test_uid_processor_unique_per_record() {
        let mut first = blank_record();
        let mut second = blank_record();
        UidProcessor.process(&mut first);
        UidProcessor.process(&mut second);
        assert_ne!(first.fields["uid"], second.fields["uid"]);
    }

    #[test]
    fn test_tags_processor() {
        let mut tags = BTreeMap::new();
        tags.insert("env".to_string(), "staging".to_string());
        let mut record = blank_record();
        TagsProcessor::new(tags).process(&mut record);
        assert_eq!(record.fields["env"], "staging");
    }
}
