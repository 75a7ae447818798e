use dioxus::prelude::*;

use crate::context::SharedTransport;
use crate::pages::IntakePage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the transport/age policy context.
#[component]
pub fn App() -> Element {
    let Some(settings) = crate::settings() else {
        return rsx! {
            style { {GLOBAL_STYLES} }
            div { class: "intake-page", "Configuración no disponible" }
        };
    };

    use_context_provider(|| -> SharedTransport { settings.transport.clone() });
    use_context_provider(|| settings.age_policy);

    rsx! {
        style { {GLOBAL_STYLES} }
        IntakePage {}
    }
}
