//! Visual theme for the intake desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
