// src/commands/mod.rs
// This file declares the existence of our command modules.

pub mod activity;
pub mod character;
pub mod friend;
pub mod help;
pub mod leaderboard;
pub mod ping;
pub mod pickup;
pub mod profile;
pub mod restaurants;

use serenity::model::application::{CommandDataOptionValue, CommandInteraction};

/// Looks up a top-level slash option by name.
pub fn option<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a CommandDataOptionValue> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .map(|o| &o.value)
}
