//! Contains the business logic for climbing the experience ladder.

use crate::config::LadderConfig;

/// Calculates the threshold for the level after one whose threshold is `current`.
pub fn next_threshold(current: u64, ladder: &LadderConfig) -> u64 {
    ((current as f64) * ladder.growth_factor).round().max(1.0) as u64
}

/// A struct to hold the results of a profile gaining experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpResult {
    pub new_level: u32,
    pub new_experience: u64,
    pub new_threshold: u64,
    pub levels_gained: u32,
    pub stat_points_granted: u32,
}

impl LevelUpResult {
    pub fn did_level_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Processes experience gain and cascades through as many levels as it covers.
///
/// Every level crossed subtracts its threshold, grows the next threshold by the
/// ladder's factor and grants a fixed number of stat points.
pub fn handle_leveling(
    level: u32,
    experience: u64,
    threshold: u64,
    gained: u64,
    ladder: &LadderConfig,
) -> LevelUpResult {
    let mut new_level = level;
    let mut new_experience = experience.saturating_add(gained);
    let mut xp_needed = threshold.max(1);
    let mut levels_gained = 0;

    while new_experience >= xp_needed {
        new_experience -= xp_needed;
        new_level += 1;
        levels_gained += 1;

        xp_needed = next_threshold(xp_needed, ladder);
    }

    LevelUpResult {
        new_level,
        new_experience,
        new_threshold: xp_needed,
        levels_gained,
        stat_points_granted: levels_gained * ladder.stat_points_per_level,
    }
}
