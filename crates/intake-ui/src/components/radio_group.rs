//! Radio Group Component
//!
//! Mutually exclusive options sharing one input name. Exactly the option
//! whose value equals `selected` is checked; an empty `selected` checks none.

use dioxus::prelude::*;

/// One selectable option
#[derive(Clone, PartialEq, Debug)]
pub struct RadioOption {
    /// Submitted value
    pub value: String,
    /// Visible label
    pub label: String,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the RadioGroup component
#[derive(Clone, PartialEq, Props)]
pub struct RadioGroupProps {
    /// Shared input name
    pub name: String,
    pub options: Vec<RadioOption>,
    /// Value of the checked option, empty for none
    pub selected: String,
    /// Handler called with the value of the option picked
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn RadioGroup(props: RadioGroupProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                span { class: "input-label", "{label}" }
            }
            div { class: "radio-group",
                for option in props.options.iter() {
                    {
                        let id = option_id(&props.name, &option.value);
                        let value = option.value.clone();
                        let checked = props.selected == option.value;
                        let onchange = props.onchange;
                        rsx! {
                            div { key: "{id}", class: "radio-option",
                                input {
                                    id: "{id}",
                                    r#type: "radio",
                                    name: "{props.name}",
                                    value: "{option.value}",
                                    checked: checked,
                                    disabled: props.disabled,
                                    onchange: move |_| onchange.call(value.clone()),
                                }
                                label { r#for: "{id}", "{option.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Element id of one option, e.g. `sexo-femenino`
pub(crate) fn option_id(name: &str, value: &str) -> String {
    format!("{}-{}", name, value)
}
