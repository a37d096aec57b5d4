//! `/character` and `/allocate`: the companion character and its stat points.
pub mod run;
pub mod ui;
