//! Shared embed and component styling.
pub mod buttons;
pub mod style;
