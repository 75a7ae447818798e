//! tracing Layer that mirrors events into a station's JSONL file.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::JsonLogEntry;
use super::writer::StationLogWriter;

/// A tracing Layer writing every event it sees to a [`StationLogWriter`].
pub struct JsonlLayer {
    writer: Arc<StationLogWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<Path>, station: impl Into<String>) -> std::io::Result<Self> {
        let writer = StationLogWriter::new(logs_dir, station)?;
        Ok(Self {
            writer: Arc::new(writer),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }

    pub fn station(&self) -> &str {
        self.writer.station()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level().as_str().to_lowercase();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = JsonLogEntry::new(
            level,
            self.writer.station(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // A failing log write must never take the form down
        let _ = self.writer.write(&entry);
    }
}

/// Collects an event's message and fields as JSON values.
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, serde_json::Value::String(value.to_string()));
    }
}

/// Installs the global subscriber: env filter, optional console output and
/// the station's JSONL layer.
pub struct LoggingBuilder {
    logs_dir: PathBuf,
    station: String,
    console_output: bool,
    env_filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new(logs_dir: impl Into<PathBuf>, station: impl Into<String>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            station: station.into(),
            console_output: true,
            env_filter: None,
        }
    }

    /// Only write to the JSONL file
    pub fn no_console(mut self) -> Self {
        self.console_output = false;
        self
    }

    /// Set the filter directive (e.g. "intake=info,intake_core=debug").
    /// Without one, `RUST_LOG` is used, falling back to `info`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Build the JSONL layer for manual composition
    pub fn build_layer(&self) -> std::io::Result<JsonlLayer> {
        JsonlLayer::new(&self.logs_dir, &self.station)
    }

    /// Install as the global default subscriber.
    ///
    /// Returns the path of the JSONL file being written.
    pub fn init(self) -> std::io::Result<PathBuf> {
        let layer = self.build_layer()?;
        let path = layer.log_path().to_path_buf();

        let filter = match &self.env_filter {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };
        let console = self.console_output.then(tracing_subscriber::fmt::layer);

        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .with(console)
            .try_init()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::read_entries;
    use tempfile::TempDir;

    #[test]
    fn test_jsonl_layer_captures_events() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let layer = JsonlLayer::new(&logs_dir, "recepcion").unwrap();
        let log_path = layer.log_path().to_path_buf();
        assert_eq!(layer.station(), "recepcion");

        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Intake record submitted");
            tracing::warn!(status = 500u64, "Intake submission failed");
        });

        let entries = read_entries(&log_path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "Intake record submitted");
        assert_eq!(entries[0].level, "info");
        assert_eq!(entries[1].station, "recepcion");
        assert_eq!(entries[1].fields.as_ref().unwrap()["status"], 500);
    }

    #[test]
    fn test_span_names_are_recorded() {
        let temp = TempDir::new().unwrap();
        let layer = LoggingBuilder::new(temp.path(), "triaje")
            .no_console()
            .build_layer()
            .unwrap();
        let log_path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("submit");
            let _guard = span.enter();
            tracing::debug!("Posting intake record");
        });

        let entries = read_entries(&log_path).unwrap();
        assert_eq!(entries[0].span.as_deref(), Some("submit"));
    }

    #[test]
    fn test_rejected_age_text_never_reaches_log() {
        use crate::{FieldUpdate, IntakeForm, Sex};

        let temp = TempDir::new().unwrap();
        let layer = JsonlLayer::new(temp.path(), "recepcion").unwrap();
        let log_path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            let mut form = IntakeForm::new();
            form.update_field(FieldUpdate::Nombres("Ana".into()));
            form.update_field(FieldUpdate::Apellidos("Lopez".into()));
            form.update_field(FieldUpdate::Sexo(Sex::Femenino));
            form.update_field(FieldUpdate::Edad("treinta y cuatro".into()));
            form.update_field(FieldUpdate::Diagnostico("gripe".into()));
            assert!(form.begin_submit().is_err());
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Submit blocked by validation"));
        assert!(!content.contains("treinta"));
        assert!(!content.contains("Ana"));
        assert!(!content.contains("gripe"));
    }
}
