//! Property-based tests for IntakeForm
//!
//! Uses proptest to check that inputs bound to the draft always show the
//! last value written, whatever the order of edits.

use std::collections::HashMap;

use intake_core::{Field, FieldUpdate, IntakeForm, Sex};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-ZáéíóúñÑ0-9 ]{0,40}").expect("valid regex")
}

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Femenino), Just(Sex::Masculino)]
}

fn update_strategy() -> impl Strategy<Value = FieldUpdate> {
    prop_oneof![
        text_strategy().prop_map(FieldUpdate::Nombres),
        text_strategy().prop_map(FieldUpdate::Apellidos),
        sex_strategy().prop_map(FieldUpdate::Sexo),
        text_strategy().prop_map(FieldUpdate::Edad),
        text_strategy().prop_map(FieldUpdate::Diagnostico),
    ]
}

fn written_value(update: &FieldUpdate) -> String {
    match update {
        FieldUpdate::Nombres(v)
        | FieldUpdate::Apellidos(v)
        | FieldUpdate::Edad(v)
        | FieldUpdate::Diagnostico(v) => v.clone(),
        FieldUpdate::Sexo(s) => s.as_str().to_string(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every field displays the last value written to it
    #[test]
    fn displayed_value_is_last_written(updates in prop::collection::vec(update_strategy(), 0..50)) {
        let mut form = IntakeForm::new();
        let mut expected: HashMap<Field, String> = HashMap::new();

        for update in updates {
            expected.insert(update.field(), written_value(&update));
            form.update_field(update);

            for field in Field::ALL {
                let want = expected.get(&field).map(String::as_str).unwrap_or("");
                prop_assert_eq!(form.value(field), want);
            }
        }
    }

    /// Updates never touch the busy flag or the message
    #[test]
    fn updates_do_not_change_status(updates in prop::collection::vec(update_strategy(), 0..20)) {
        let mut form = IntakeForm::new();
        for update in updates {
            form.update_field(update);
            prop_assert!(!form.is_busy());
            prop_assert!(form.message().is_empty());
        }
    }

    /// A draft is complete exactly when no field reads as empty
    #[test]
    fn completeness_matches_missing_fields(updates in prop::collection::vec(update_strategy(), 0..30)) {
        let mut form = IntakeForm::new();
        for update in updates {
            form.update_field(update);
        }
        let draft = form.draft();
        prop_assert_eq!(draft.is_complete(), draft.missing_fields().is_empty());
    }
}
