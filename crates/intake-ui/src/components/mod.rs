//! Reusable form components

mod button;
mod input;
mod radio_group;
mod status_banner;

pub use button::*;
pub use input::*;
pub use radio_group::*;
pub use status_banner::*;
