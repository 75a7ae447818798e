//! Context values shared with the component tree.
//!
//! ```ignore
//! // In any component below App
//! let transport = use_transport();
//! let policy = use_age_policy();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use intake_core::{AgePolicy, HttpTransport};

/// Transport shared by every form instance
pub type SharedTransport = Arc<HttpTransport>;

/// Hook to access the HTTP transport from context.
pub fn use_transport() -> SharedTransport {
    use_context::<SharedTransport>()
}

/// Hook to access the configured age coercion policy.
pub fn use_age_policy() -> AgePolicy {
    use_context::<AgePolicy>()
}
