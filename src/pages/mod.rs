//! Page components for the intake app.

mod intake;

pub use intake::IntakePage;
