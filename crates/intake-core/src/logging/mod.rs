//! Per-station JSONL audit logging.
//!
//! Every desktop installation ("station") appends its tracing events to its
//! own file, one file per day:
//!
//! ```text
//! logs/
//! └── raw/
//!     ├── 2026-10-19_recepcion.jsonl
//!     └── 2026-10-19_triaje.jsonl
//! ```
//!
//! Events from the form carry field names, HTTP status codes and outcomes,
//! never the values a patient typed.
//!
//! ## Usage
//!
//! ```ignore
//! use intake_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("./logs", "recepcion")
//!     .with_filter("intake=info,intake_core=debug")
//!     .init()?;
//! ```
//!
//! ```bash
//! # All failed submissions of the day
//! jq 'select(.level == "warn")' logs/raw/2026-10-19_*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use writer::{read_entries, StationLogWriter};
