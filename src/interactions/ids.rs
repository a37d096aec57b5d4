//! Centralized custom_id string constants for interaction components.
//! The first `_`-separated segment is the family the handler routes on.

use crate::progression::allocation::StatAllocation;
use crate::progression::ranking::Cohort;
use crate::progression::summary::StatDetail;

// Leaderboard cohort tabs
pub const LEADERBOARD_ALL: &str = "leaderboard_all";
pub const LEADERBOARD_FRIENDS: &str = "leaderboard_friends";
pub const LEADERBOARD_WEEKLY: &str = "leaderboard_weekly";

// Character sheet stat buttons
pub const CHARACTER_ADD_ATTACK: &str = "character_add_attack";
pub const CHARACTER_ADD_DEFENSE: &str = "character_add_defense";
pub const CHARACTER_REFRESH: &str = "character_refresh";

// Stat breakdown toggles
pub const STATS_CALORIES: &str = "stats_calories";
pub const STATS_MONEY: &str = "stats_money";

// Help command picker
pub const HELP_SELECT_COMMAND: &str = "help_select_command";

pub fn leaderboard_id(cohort: Cohort) -> &'static str {
    match cohort {
        Cohort::All => LEADERBOARD_ALL,
        Cohort::Friends => LEADERBOARD_FRIENDS,
        Cohort::Weekly => LEADERBOARD_WEEKLY,
    }
}

pub fn parse_leaderboard_id(id: &str) -> Option<Cohort> {
    match id {
        LEADERBOARD_ALL => Some(Cohort::All),
        LEADERBOARD_FRIENDS => Some(Cohort::Friends),
        LEADERBOARD_WEEKLY => Some(Cohort::Weekly),
        _ => None,
    }
}

pub fn stats_id(detail: StatDetail) -> &'static str {
    match detail {
        StatDetail::CaloriesBurned => STATS_CALORIES,
        StatDetail::MoneySaved => STATS_MONEY,
    }
}

pub fn parse_stats_id(id: &str) -> Option<StatDetail> {
    match id {
        STATS_CALORIES => Some(StatDetail::CaloriesBurned),
        STATS_MONEY => Some(StatDetail::MoneySaved),
        _ => None,
    }
}

/// Single-point allocation carried by a character sheet button.
/// `None` for ids that are not allocation buttons (e.g. refresh).
pub fn parse_character_id(id: &str) -> Option<StatAllocation> {
    match id {
        CHARACTER_ADD_ATTACK => Some(StatAllocation {
            attack: 1,
            defense: 0,
        }),
        CHARACTER_ADD_DEFENSE => Some(StatAllocation {
            attack: 0,
            defense: 1,
        }),
        _ => None,
    }
}

/// Routing family of a custom_id (`leaderboard_all` -> `leaderboard`).
pub fn family(id: &str) -> &str {
    id.split('_').next().unwrap_or("")
}
