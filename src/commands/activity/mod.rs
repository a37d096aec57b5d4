//! `/activity`, `/stats` and `/share`: read-only views over the pickup history.
pub mod run;
pub mod ui;
