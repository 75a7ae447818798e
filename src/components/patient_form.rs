//! Patient Form - the five controlled inputs, submit button and banner.
//!
//! All form state lives in one `Signal<IntakeForm>`. Inputs render from the
//! draft and write back through `update_field`, so what is shown is always
//! what is stored. Submission runs `begin_submit` synchronously, awaits the
//! transport in a spawned task, then `finish`es on the same signal.

use dioxus::prelude::*;
use intake_core::{Field, FieldUpdate, IntakeForm, IntakeTransport, Sex};
use intake_ui::{Button, Input, RadioGroup, RadioOption, StatusBanner};

use crate::context::{use_age_policy, use_transport};

const PRIVACY_NOTICE: &str =
    "Nuestro servicio respeta la Ley Orgánica de Protección de Datos del Ecuador";

fn sex_options() -> Vec<RadioOption> {
    Sex::ALL
        .iter()
        .map(|sex| RadioOption::new(sex.as_str(), sex.label()))
        .collect()
}

#[component]
pub fn PatientForm() -> Element {
    let transport = use_transport();
    let age_policy = use_age_policy();
    let mut form = use_signal(move || IntakeForm::with_age_policy(age_policy));

    let on_submit = move |_: ()| {
        let attempt = form.write().begin_submit();
        let record = match attempt {
            Ok(record) => record,
            // Message already set on the form; nothing to send
            Err(e) => {
                tracing::debug!(error = %e, "Submission not started");
                return;
            }
        };

        let transport = transport.clone();
        spawn(async move {
            let outcome = transport.send(&record).await;
            form.write().finish(outcome);
        });
    };

    let on_sex = move |value: String| match value.parse::<Sex>() {
        Ok(sex) => form.write().update_field(FieldUpdate::Sexo(sex)),
        Err(e) => tracing::warn!("Ignoring radio value: {}", e),
    };

    let state = form.read();
    let busy = state.is_busy();
    let message = state.message().clone();
    let nombres = state.value(Field::Nombres).to_string();
    let apellidos = state.value(Field::Apellidos).to_string();
    let sexo = state.value(Field::Sexo).to_string();
    let edad = state.value(Field::Edad).to_string();
    let diagnostico = state.value(Field::Diagnostico).to_string();
    drop(state);

    rsx! {
        div { class: "intake-form",
            div { class: "intake-grid",
                Input {
                    name: Field::Nombres.name().to_string(),
                    id: "nombresPaciente".to_string(),
                    label: Field::Nombres.label().to_string(),
                    value: nombres,
                    oninput: move |v| form.write().update_field(FieldUpdate::Nombres(v)),
                }
                Input {
                    name: Field::Apellidos.name().to_string(),
                    id: "apellidosPaciente".to_string(),
                    label: Field::Apellidos.label().to_string(),
                    value: apellidos,
                    oninput: move |v| form.write().update_field(FieldUpdate::Apellidos(v)),
                }

                div { class: "span-full",
                    RadioGroup {
                        name: Field::Sexo.name().to_string(),
                        options: sex_options(),
                        selected: sexo,
                        onchange: on_sex,
                    }
                }

                div { class: "span-full",
                    Input {
                        name: Field::Edad.name().to_string(),
                        id: "edadPaciente".to_string(),
                        label: Field::Edad.label().to_string(),
                        input_type: "number".to_string(),
                        min: "0".to_string(),
                        max: "150".to_string(),
                        value: edad,
                        oninput: move |v| form.write().update_field(FieldUpdate::Edad(v)),
                    }
                }

                div { class: "span-full",
                    Input {
                        name: Field::Diagnostico.name().to_string(),
                        id: "diagnosticoPaciente".to_string(),
                        label: Field::Diagnostico.label().to_string(),
                        class: "input-field--tall".to_string(),
                        value: diagnostico,
                        oninput: move |v| form.write().update_field(FieldUpdate::Diagnostico(v)),
                    }
                }
            }

            p { class: "privacy-notice", "{PRIVACY_NOTICE}" }

            Button {
                disabled: busy,
                onclick: on_submit,
                if busy { "Enviando..." } else { "Enviar datos" }
            }

            StatusBanner { message: message }
        }
    }
}
