//! Stateful components of the intake app.

mod patient_form;

pub use patient_form::PatientForm;
