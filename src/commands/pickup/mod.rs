//! `/pickup`: log a completed self-pickup and show the rewards it earned.
pub mod logic;
pub mod run;
pub mod ui;
