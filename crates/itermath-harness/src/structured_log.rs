//! Structured JSONL logging for harness runs.
//!
//! Provides:
//! - [`LogEntry`]: JSONL record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file or an in-memory buffer.
//! - [`validate_log_line`]: validates a single line against the schema.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Verification outcome attached to case events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// One structured log record.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create an entry with the required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            outcome: None,
            details: None,
        }
    }

    /// Set the outcome.
    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

enum Sink {
    File(std::io::BufWriter<std::fs::File>),
    Buffer(Vec<u8>),
}

/// Writes JSONL log lines.
pub struct LogEmitter {
    sink: Sink,
}

impl LogEmitter {
    /// Append to a file, creating it if needed.
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            sink: Sink::File(std::io::BufWriter::new(file)),
        })
    }

    /// Collect into an in-memory buffer (for testing).
    #[must_use]
    pub fn to_buffer() -> Self {
        Self {
            sink: Sink::Buffer(Vec::new()),
        }
    }

    /// Write one entry as a JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        match &mut self.sink {
            Sink::File(writer) => {
                writeln!(writer, "{line}")?;
                writer.flush()
            }
            Sink::Buffer(buffer) => writeln!(buffer, "{line}"),
        }
    }

    /// The buffered bytes, when collecting in memory.
    #[must_use]
    pub fn buffer_contents(&self) -> Option<&[u8]> {
        match &self.sink {
            Sink::File(_) => None,
            Sink::Buffer(buffer) => Some(buffer),
        }
    }
}

/// Validate one JSONL line: parseable JSON with non-empty required fields.
pub fn validate_log_line(line: &str) -> Result<(), String> {
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"))?;
    for field in ["timestamp", "trace_id", "level", "event"] {
        match value.get(field) {
            Some(serde_json::Value::String(s)) if !s.is_empty() => {}
            _ => return Err(format!("missing or empty required field: {field}")),
        }
    }
    Ok(())
}

fn now_utc() -> String {
    // Approximate UTC rendering from SystemTime, good enough for log
    // ordering; avoids a chrono dependency.
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        1970 + secs / 31_557_600,
        (secs % 31_557_600) / 2_629_800 + 1,
        (secs % 2_629_800) / 86400 + 1,
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        millis,
    )
}
