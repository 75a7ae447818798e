//! Patient Intake Core Library
//!
//! State, validation and submission of the patient intake form, independent
//! of any UI toolkit.
//!
//! ## Overview
//!
//! The form collects five fields (nombres, apellidos, sexo, edad,
//! diagnostico), refuses to submit while any is empty, and POSTs the record
//! as JSON to `/api/pacientes`. A busy flag covers the single in-flight
//! request and one status message reports the outcome.
//!
//! ## Quick Start
//!
//! ```ignore
//! use intake_core::{FieldUpdate, HttpTransport, IntakeForm, Sex, TransportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new(&TransportConfig::new("http://localhost:8080"))?;
//!
//!     let mut form = IntakeForm::new();
//!     form.update_field(FieldUpdate::Nombres("Ana".into()));
//!     form.update_field(FieldUpdate::Apellidos("Lopez".into()));
//!     form.update_field(FieldUpdate::Sexo(Sex::Femenino));
//!     form.update_field(FieldUpdate::Edad("34".into()));
//!     form.update_field(FieldUpdate::Diagnostico("gripe".into()));
//!
//!     let _ = form.submit(&transport).await;
//!     println!("{}", form.message());
//!     Ok(())
//! }
//! ```

pub mod age;
pub mod error;
pub mod form;
pub mod logging;
pub mod status;
pub mod transport;
pub mod types;

// Re-exports
pub use age::AgePolicy;
pub use error::{IntakeError, IntakeResult};
pub use form::IntakeForm;
pub use status::StatusMessage;
pub use transport::{HttpTransport, IntakeTransport, TransportConfig, DEFAULT_BASE_URL, ENDPOINT_PATH};
pub use types::*;
