//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file delegates here based on the component's "family"
//! (the first `_`-separated segment of its custom_id, e.g. "leaderboard").

pub mod character_handler;
pub mod ids;
pub mod leaderboard_handler;
pub mod stats_handler;
pub mod util;
