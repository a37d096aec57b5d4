//! `/profile` and `/rename`: the player's level card and display name.
pub mod run;
pub mod ui;
