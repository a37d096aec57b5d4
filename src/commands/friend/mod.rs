//! `/friend`: add a friend by nickname or list current friends.
pub mod run;
pub mod ui;
