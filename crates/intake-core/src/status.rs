//! User-facing status message of the form.

use std::fmt;

use crate::error::IntakeError;

pub const INCOMPLETE_TEXT: &str = "Por favor complete todos los campos";
pub const SENT_TEXT: &str = "Datos enviados correctamente";
pub const REJECTED_TEXT: &str = "Error al enviar los datos";
pub const CONNECTION_PREFIX: &str = "Error de conexión: ";
pub const INVALID_AGE_TEXT: &str = "Error: la edad debe ser un número entero";

/// The single message shown under the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusMessage {
    /// Nothing to show
    #[default]
    Empty,
    /// Submit pressed with at least one empty field
    Incomplete,
    /// Age text could not be coerced (strict policy)
    InvalidAge,
    /// Server accepted the record
    Sent,
    /// Server answered with a non-success status
    Rejected,
    /// The request failed; carries the error description
    Connection(String),
}

impl StatusMessage {
    /// Message for a failed submission attempt
    pub fn from_error(err: &IntakeError) -> Self {
        match err {
            IntakeError::ValidationIncomplete { .. } => StatusMessage::Incomplete,
            IntakeError::InvalidAge => StatusMessage::InvalidAge,
            IntakeError::RequestRejected { .. } => StatusMessage::Rejected,
            IntakeError::Transport(description) => StatusMessage::Connection(description.clone()),
            // Client never built, nothing was sent
            IntakeError::Config(description) => StatusMessage::Connection(description.clone()),
            IntakeError::AlreadySubmitting => StatusMessage::Empty,
        }
    }

    pub fn text(&self) -> String {
        match self {
            StatusMessage::Empty => String::new(),
            StatusMessage::Incomplete => INCOMPLETE_TEXT.to_string(),
            StatusMessage::InvalidAge => INVALID_AGE_TEXT.to_string(),
            StatusMessage::Sent => SENT_TEXT.to_string(),
            StatusMessage::Rejected => REJECTED_TEXT.to_string(),
            StatusMessage::Connection(description) => format!("{}{}", CONNECTION_PREFIX, description),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StatusMessage::Empty)
    }

    /// Whether the message should be styled as an error.
    ///
    /// Decided on the rendered text: it contains the literal `"Error"`.
    pub fn is_error(&self) -> bool {
        self.text().contains("Error")
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
