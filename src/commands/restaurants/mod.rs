//! `/restaurants`: browse the pickup-friendly restaurant catalog.
pub mod run;
pub mod ui;
