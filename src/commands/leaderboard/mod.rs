//! `/leaderboard`: cohort rankings with tab buttons.
pub mod run;
pub mod ui;
