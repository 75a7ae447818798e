//! Patient Intake UI Components
//!
//! Dioxus components used by the intake desktop app. They are purely
//! presentational: values come in through props and edits go out through
//! event handlers, so the caller's state stays the single source of truth.
//!
//! Class names match the stylesheet shipped by the desktop app
//! (`.form-field`, `.input-field`, `.btn-primary`, `.status-banner`...).

pub mod components;

pub use components::*;
