//! Error types for the patient intake form

use thiserror::Error;

use crate::types::Field;

/// Main error type for intake operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// One or more required fields were empty at submit time
    #[error("Missing required fields: {}", field_list(.missing))]
    ValidationIncomplete { missing: Vec<Field> },

    /// Age text could not be read as an integer (strict policy only).
    /// Carries no copy of the text so it cannot reach logs.
    #[error("Invalid age: not a whole number")]
    InvalidAge,

    /// A submission is already outstanding for this form
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// Server answered with a non-success status
    #[error("Request rejected with status {status}")]
    RequestRejected { status: u16 },

    /// The request itself failed (unreachable host, reset, timeout...)
    #[error("{0}")]
    Transport(String),

    /// Bad base URL or HTTP client construction failure
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for IntakeError {
    fn from(err: reqwest::Error) -> Self {
        IntakeError::Transport(describe_reqwest_error(&err))
    }
}

/// Result type alias using IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten a reqwest error and its sources into one line.
///
/// reqwest's top-level message ("error sending request for url ...") hides
/// the actual cause, which is what the person at the desk needs to see.
fn describe_reqwest_error(err: &reqwest::Error) -> String {
    let mut description = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntakeError::RequestRejected { status: 503 };
        assert_eq!(format!("{}", err), "Request rejected with status 503");
    }

    #[test]
    fn test_incomplete_lists_field_names() {
        let err = IntakeError::ValidationIncomplete {
            missing: vec![Field::Sexo, Field::Diagnostico],
        };
        assert_eq!(err.to_string(), "Missing required fields: sexo, diagnostico");
    }

    #[test]
    fn test_invalid_age_display_has_no_value() {
        let err = IntakeError::InvalidAge;
        assert_eq!(err.to_string(), "Invalid age: not a whole number");
        assert_eq!(format!("{:?}", err), "InvalidAge");
    }

    #[test]
    fn test_transport_display_is_bare_description() {
        let err = IntakeError::Transport("timeout".to_string());
        assert_eq!(err.to_string(), "timeout");
    }
}
