//! Core types for the patient intake form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sex of the patient as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Femenino,
    Masculino,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Femenino, Sex::Masculino];

    /// Wire value, also used as the radio input value
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Femenino => "femenino",
            Sex::Masculino => "masculino",
        }
    }

    /// Display label next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Femenino => "Femenino",
            Sex::Masculino => "Masculino",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "femenino" => Ok(Sex::Femenino),
            "masculino" => Ok(Sex::Masculino),
            _ => Err(format!(
                "Invalid sex '{}'. Must be one of: femenino, masculino",
                s
            )),
        }
    }
}

/// Identifier of one of the five form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nombres,
    Apellidos,
    Sexo,
    Edad,
    Diagnostico,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 5] = [
        Field::Nombres,
        Field::Apellidos,
        Field::Sexo,
        Field::Edad,
        Field::Diagnostico,
    ];

    /// Input name and JSON key
    pub fn name(&self) -> &'static str {
        match self {
            Field::Nombres => "nombres",
            Field::Apellidos => "apellidos",
            Field::Sexo => "sexo",
            Field::Edad => "edad",
            Field::Diagnostico => "diagnostico",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Nombres => "Nombres",
            Field::Apellidos => "Apellidos",
            Field::Sexo => "Sexo",
            Field::Edad => "Edad",
            Field::Diagnostico => "Diagnóstico",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A new value for exactly one field of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Nombres(String),
    Apellidos(String),
    Sexo(Sex),
    /// Raw age text as typed; coerced to an integer only on submit
    Edad(String),
    Diagnostico(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Nombres(_) => Field::Nombres,
            FieldUpdate::Apellidos(_) => Field::Apellidos,
            FieldUpdate::Sexo(_) => Field::Sexo,
            FieldUpdate::Edad(_) => Field::Edad,
            FieldUpdate::Diagnostico(_) => Field::Diagnostico,
        }
    }
}

/// The in-progress, possibly incomplete record held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeDraft {
    pub nombres: String,
    pub apellidos: String,
    pub sexo: Option<Sex>,
    pub edad: String,
    pub diagnostico: String,
}

impl IntakeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single field update. Never validates.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Nombres(v) => self.nombres = v,
            FieldUpdate::Apellidos(v) => self.apellidos = v,
            FieldUpdate::Sexo(v) => self.sexo = Some(v),
            FieldUpdate::Edad(v) => self.edad = v,
            FieldUpdate::Diagnostico(v) => self.diagnostico = v,
        }
    }

    /// Current value of a field as an input would display it.
    ///
    /// An unselected sex reads as the empty string.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Nombres => &self.nombres,
            Field::Apellidos => &self.apellidos,
            Field::Sexo => self.sexo.map(|s| s.as_str()).unwrap_or(""),
            Field::Edad => &self.edad,
            Field::Diagnostico => &self.diagnostico,
        }
    }

    /// Fields that are still empty, in form order.
    ///
    /// Only the empty string counts as empty; whitespace is a value.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.value(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.value(*f).is_empty())
    }

    /// Reset every field to empty/unselected
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The record sent to `/api/pacientes`.
///
/// `edad` is `None` only under the lenient age policy when the text held no
/// leading digits, and then serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub nombres: String,
    pub apellidos: String,
    pub sexo: Sex,
    pub edad: Option<i64>,
    pub diagnostico: String,
}

impl IntakeRecord {
    /// Serialize to the JSON request body
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> IntakeDraft {
        IntakeDraft {
            nombres: "Ana".into(),
            apellidos: "Lopez".into(),
            sexo: Some(Sex::Femenino),
            edad: "34".into(),
            diagnostico: "gripe".into(),
        }
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!("femenino".parse::<Sex>().unwrap(), Sex::Femenino);
        assert_eq!("MASCULINO".parse::<Sex>().unwrap(), Sex::Masculino);
        assert!("otro".parse::<Sex>().is_err());
    }

    #[test]
    fn test_sex_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sex::Masculino).unwrap(), "\"masculino\"");
    }

    #[test]
    fn test_empty_draft_misses_everything() {
        let draft = IntakeDraft::new();
        assert_eq!(draft.missing_fields(), Field::ALL.to_vec());
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_only_diagnosis_missing() {
        let mut draft = complete_draft();
        draft.apply(FieldUpdate::Diagnostico(String::new()));
        assert_eq!(draft.missing_fields(), vec![Field::Diagnostico]);
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut draft = complete_draft();
        draft.apply(FieldUpdate::Nombres("  ".into()));
        assert!(draft.is_complete());
    }

    #[test]
    fn test_value_reflects_update() {
        let mut draft = IntakeDraft::new();
        assert_eq!(draft.value(Field::Sexo), "");
        draft.apply(FieldUpdate::Sexo(Sex::Masculino));
        assert_eq!(draft.value(Field::Sexo), "masculino");
        draft.apply(FieldUpdate::Edad("4".into()));
        assert_eq!(draft.value(Field::Edad), "4");
    }

    #[test]
    fn test_update_targets_field() {
        assert_eq!(FieldUpdate::Edad("1".into()).field(), Field::Edad);
        assert_eq!(FieldUpdate::Sexo(Sex::Femenino).field(), Field::Sexo);
    }

    #[test]
    fn test_clear_resets_draft() {
        let mut draft = complete_draft();
        draft.clear();
        assert_eq!(draft, IntakeDraft::default());
    }

    #[test]
    fn test_record_field_order() {
        let record = IntakeRecord {
            nombres: "Ana".into(),
            apellidos: "Lopez".into(),
            sexo: Sex::Femenino,
            edad: Some(34),
            diagnostico: "gripe".into(),
        };
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"nombres":"Ana","apellidos":"Lopez","sexo":"femenino","edad":34,"diagnostico":"gripe"}"#
        );
    }

    #[test]
    fn test_record_unparsed_age_is_null() {
        let record = IntakeRecord {
            nombres: "Ana".into(),
            apellidos: "Lopez".into(),
            sexo: Sex::Femenino,
            edad: None,
            diagnostico: "gripe".into(),
        };
        assert!(record.to_json().unwrap().contains(r#""edad":null"#));
    }
}
