//! Input Field Component
//!
//! Controlled single-line input: the rendered value is always `props.value`,
//! edits are reported through `oninput` and only show up once the caller
//! writes them back.

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Input name, also used to derive the element id
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called with the new text on every edit
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, number...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Lower bound hint for number inputs
    #[props(default)]
    pub min: Option<String>,
    /// Upper bound hint for number inputs
    #[props(default)]
    pub max: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Element id; defaults to `input-<name>`
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text or number input with an associated label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "edad".to_string(),
///         label: "Edad".to_string(),
///         input_type: "number".to_string(),
///         min: "0".to_string(),
///         max: "150".to_string(),
///         value: form.read().value(Field::Edad).to_string(),
///         oninput: move |v| form.write().update_field(FieldUpdate::Edad(v)),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = element_id(props.id.as_deref(), &props.name);
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                min: props.min.clone(),
                max: props.max.clone(),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Stable element id for label association
pub(crate) fn element_id(explicit: Option<&str>, name: &str) -> String {
    match explicit {
        Some(id) => id.to_string(),
        None => format!("input-{}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_prefers_explicit() {
        assert_eq!(element_id(Some("edadPaciente"), "edad"), "edadPaciente");
    }

    #[test]
    fn element_id_derives_from_name() {
        assert_eq!(element_id(None, "nombres"), "input-nombres");
        // same name, same id across renders
        assert_eq!(element_id(None, "nombres"), element_id(None, "nombres"));
    }
}
