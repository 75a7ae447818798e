//! Log entry type for JSONL-based logging.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single line of a station's JSONL log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// RFC 3339 timestamp with milliseconds (e.g. "2026-10-19T14:30:45.123Z")
    pub ts: String,

    /// trace, debug, info, warn, error
    pub level: String,

    /// Station name (e.g. "recepcion")
    pub station: String,

    /// Module path / target (e.g. "intake_core::form")
    pub target: String,

    pub msg: String,

    /// Structured event fields, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, outermost first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl JsonLogEntry {
    /// Create a new log entry stamped with the current time.
    pub fn new(
        level: impl Into<String>,
        station: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            station: station.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_roundtrips_through_line() {
        let entry = JsonLogEntry::new("warn", "recepcion", "intake_core::form", "Intake submission failed")
            .with_fields(serde_json::json!({ "status": 500 }));
        let line = entry.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(!line.contains("\"span\""));

        let parsed = JsonLogEntry::from_json_line(&line).unwrap();
        assert_eq!(parsed.station, "recepcion");
        assert_eq!(parsed.fields.unwrap()["status"], 500);
    }
}
