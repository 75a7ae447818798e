use dioxus::prelude::*;

use crate::components::PatientForm;

/// The only page: heading, form, data-protection notice.
#[component]
pub fn IntakePage() -> Element {
    rsx! {
        div { class: "intake-page",
            h3 { class: "page-title", "Ingrese su información" }
            p { class: "page-subtitle", "Por favor ingrese la información del paciente" }
            PatientForm {}
        }
    }
}
