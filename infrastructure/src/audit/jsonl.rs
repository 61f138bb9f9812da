//! JSONL file writer for verdict audit events.
//!
//! Each [`AuditEvent`] is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tribunal_application::ports::audit_log::{AuditEvent, VerdictAuditLog};

/// JSONL audit log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on every record and
/// on `Drop` - the audit trail is append-only and should survive crashes.
pub struct JsonlAuditLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAuditLog {
    /// Create a new log appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VerdictAuditLog for JsonlAuditLog {
    fn record(&self, event: AuditEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Build the record: merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per record - the audit trail must survive crashes
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAuditLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_audit_log_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verdicts.jsonl");
        let log = JsonlAuditLog::new(&path).unwrap();

        log.record(AuditEvent::new(
            "trial_decided",
            serde_json::json!({
                "fingerprint": "abc123",
                "verdict": { "classification": "suspicious" },
            }),
        ));
        log.record(AuditEvent::new(
            "case_invalidated",
            serde_json::json!({ "fingerprint": "abc123" }),
        ));

        drop(log);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "trial_decided");
        assert_eq!(first["fingerprint"], "abc123");
        assert!(first["timestamp"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["type"], "case_invalidated");
    }

    #[test]
    fn test_append_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verdicts.jsonl");

        for _ in 0..2 {
            let log = JsonlAuditLog::new(&path).unwrap();
            log.record(AuditEvent::new("trial_decided", serde_json::json!({})));
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
