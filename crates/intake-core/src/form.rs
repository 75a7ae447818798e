//! Patient intake form state machine.
//!
//! Holds the draft, the busy flag and the status message, and moves them
//! through one submission attempt:
//!
//! ```text
//! idle --begin_submit()--> submitting --finish(outcome)--> idle
//!   \                                                       ^
//!    \--(incomplete / bad age: message only)---------------/
//! ```
//!
//! The attempt is split in two so a UI can await the transport between the
//! halves without holding a borrow of the form. [`IntakeForm::submit`] runs
//! both halves for callers that own the form across the await.

use tracing::{debug, info, warn};

use crate::age::AgePolicy;
use crate::error::{IntakeError, IntakeResult};
use crate::status::StatusMessage;
use crate::transport::IntakeTransport;
use crate::types::{Field, FieldUpdate, IntakeDraft, IntakeRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeForm {
    draft: IntakeDraft,
    busy: bool,
    message: StatusMessage,
    age_policy: AgePolicy,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age_policy(age_policy: AgePolicy) -> Self {
        Self {
            age_policy,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    /// Displayed value of a field; always the last value written to it
    pub fn value(&self, field: Field) -> &str {
        self.draft.value(field)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    pub fn age_policy(&self) -> AgePolicy {
        self.age_policy
    }

    /// Write a field. No validation; always succeeds.
    pub fn update_field(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    /// First half of a submission attempt.
    ///
    /// On a complete draft: sets busy, clears the message and returns the
    /// record to send. Otherwise sets the matching message and returns the
    /// error without touching the busy flag. A form that is already busy is
    /// left untouched.
    pub fn begin_submit(&mut self) -> IntakeResult<IntakeRecord> {
        if self.busy {
            debug!("Submit ignored: request already in flight");
            return Err(IntakeError::AlreadySubmitting);
        }

        match self.build_record() {
            Ok(record) => {
                self.busy = true;
                self.message = StatusMessage::Empty;
                Ok(record)
            }
            Err(err) => {
                debug!(error = %err, "Submit blocked by validation");
                self.message = StatusMessage::from_error(&err);
                Err(err)
            }
        }
    }

    /// Second half of a submission attempt.
    ///
    /// Success clears the draft; every failure keeps it for another try.
    /// The busy flag is released in all cases.
    pub fn finish(&mut self, outcome: IntakeResult<()>) {
        match &outcome {
            Ok(()) => {
                info!("Intake record submitted");
                self.message = StatusMessage::Sent;
                self.draft.clear();
            }
            Err(err) => {
                warn!(error = %err, "Intake submission failed");
                self.message = StatusMessage::from_error(err);
            }
        }
        self.busy = false;
    }

    /// Run a whole attempt against `transport`.
    ///
    /// Returns the validation error if nothing was sent, otherwise the
    /// transport outcome (already reflected in the form state).
    pub async fn submit<T: IntakeTransport>(&mut self, transport: &T) -> IntakeResult<()> {
        let record = self.begin_submit()?;
        let outcome = transport.send(&record).await;
        self.finish(outcome.clone());
        outcome
    }

    fn build_record(&self) -> IntakeResult<IntakeRecord> {
        let missing = self.draft.missing_fields();
        let sexo = match (missing.is_empty(), self.draft.sexo) {
            (true, Some(sexo)) => sexo,
            _ => return Err(IntakeError::ValidationIncomplete { missing }),
        };

        let edad = self.age_policy.coerce(&self.draft.edad)?;

        Ok(IntakeRecord {
            nombres: self.draft.nombres.clone(),
            apellidos: self.draft.apellidos.clone(),
            sexo,
            edad,
            diagnostico: self.draft.diagnostico.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sex;

    fn filled_form() -> IntakeForm {
        let mut form = IntakeForm::new();
        form.update_field(FieldUpdate::Nombres("Ana".into()));
        form.update_field(FieldUpdate::Apellidos("Lopez".into()));
        form.update_field(FieldUpdate::Sexo(Sex::Femenino));
        form.update_field(FieldUpdate::Edad("34".into()));
        form.update_field(FieldUpdate::Diagnostico("gripe".into()));
        form
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = IntakeForm::new();
        assert!(!form.is_busy());
        assert!(form.message().is_empty());
        assert_eq!(form.age_policy(), AgePolicy::Strict);
    }

    #[test]
    fn test_begin_submit_incomplete() {
        let mut form = IntakeForm::new();
        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, IntakeError::ValidationIncomplete { ref missing } if missing.len() == 5));
        assert_eq!(form.message(), &StatusMessage::Incomplete);
        assert!(!form.is_busy());
    }

    #[test]
    fn test_begin_submit_sets_busy_and_clears_message() {
        let mut form = filled_form();
        form.finish(Err(IntakeError::RequestRejected { status: 500 }));
        assert_eq!(form.message(), &StatusMessage::Rejected);

        let record = form.begin_submit().unwrap();
        assert!(form.is_busy());
        assert!(form.message().is_empty());
        assert_eq!(record.edad, Some(34));
        assert_eq!(record.sexo, Sex::Femenino);
    }

    #[test]
    fn test_begin_submit_while_busy_is_refused() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(IntakeError::AlreadySubmitting));
        assert!(form.is_busy());
        assert_eq!(form.value(Field::Nombres), "Ana");
    }

    #[test]
    fn test_strict_age_blocks_before_busy() {
        let mut form = filled_form();
        form.update_field(FieldUpdate::Edad("treinta".into()));
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, IntakeError::InvalidAge);
        assert_eq!(form.message(), &StatusMessage::InvalidAge);
        assert!(!form.is_busy());
    }

    #[test]
    fn test_lenient_age_passes_nan_through() {
        let mut form = IntakeForm::with_age_policy(AgePolicy::Lenient);
        form.update_field(FieldUpdate::Nombres("Ana".into()));
        form.update_field(FieldUpdate::Apellidos("Lopez".into()));
        form.update_field(FieldUpdate::Sexo(Sex::Femenino));
        form.update_field(FieldUpdate::Edad("e".into()));
        form.update_field(FieldUpdate::Diagnostico("gripe".into()));

        let record = form.begin_submit().unwrap();
        assert_eq!(record.edad, None);
        assert!(form.is_busy());
    }

    #[test]
    fn test_finish_success_resets_draft() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish(Ok(()));
        assert_eq!(form.draft(), &IntakeDraft::default());
        assert_eq!(form.message(), &StatusMessage::Sent);
        assert!(!form.is_busy());
    }

    #[test]
    fn test_finish_failure_keeps_draft() {
        let mut form = filled_form();
        let before = form.draft().clone();
        form.begin_submit().unwrap();
        form.finish(Err(IntakeError::Transport("connection refused".into())));
        assert_eq!(form.draft(), &before);
        assert_eq!(form.message().text(), "Error de conexión: connection refused");
        assert!(!form.is_busy());
    }
}
