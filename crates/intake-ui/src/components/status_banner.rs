//! Status Banner
//!
//! Feedback region under the submit button. Hidden while the message is
//! empty; error styling whenever the text contains "Error".

use dioxus::prelude::*;
use intake_core::StatusMessage;

/// CSS classes for a message
pub fn banner_class(message: &StatusMessage) -> &'static str {
    if message.is_error() {
        "status-banner status-banner--error"
    } else {
        "status-banner status-banner--ok"
    }
}

#[component]
pub fn StatusBanner(message: StatusMessage) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    let class = banner_class(&message);
    let text = message.text();

    rsx! {
        div { class: "{class}", "role": "status", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_get_error_class() {
        assert_eq!(
            banner_class(&StatusMessage::Rejected),
            "status-banner status-banner--error"
        );
        assert_eq!(
            banner_class(&StatusMessage::Connection("timeout".into())),
            "status-banner status-banner--error"
        );
    }

    #[test]
    fn other_messages_get_ok_class() {
        assert_eq!(banner_class(&StatusMessage::Sent), "status-banner status-banner--ok");
        assert_eq!(banner_class(&StatusMessage::Incomplete), "status-banner status-banner--ok");
    }
}
