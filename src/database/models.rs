//! Contains all the data structures held by the in-memory store.

use crate::constants::*;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// A fixed character skill. Display metadata only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

/// The avatar a user levels up. Owned 1:1 by a [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub model_url: String,
    pub attack: u32,
    pub defense: u32,
    pub unspent_stat_points: u32,
    pub skills: Vec<Skill>,
}

impl Character {
    pub fn starter(owner_id: &str) -> Self {
        Self {
            id: format!("char_{owner_id}"),
            name: STARTER_CHARACTER_NAME.to_string(),
            model_url: STARTER_MODEL_URL.to_string(),
            attack: STARTER_ATTACK,
            defense: STARTER_DEFENSE,
            unspent_stat_points: 0,
            skills: vec![
                Skill {
                    name: "Thrifty Strike".into(),
                    description: "Earns bonus points in proportion to the money saved.".into(),
                },
                Skill {
                    name: "Carbon Shield".into(),
                    description: "Defense grows with the amount of carbon reduced.".into(),
                },
            ],
        }
    }
}

/// Aggregate counters over a profile's lifetime. Never decrease.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LifetimeStats {
    pub total_pickups: u64,
    pub total_calories_burned: u64,
    pub total_money_saved: u64,
    pub total_carbon_reduced_kg: f64,
}

/// The authoritative progression record for one user.
///
/// Invariant: `experience < experience_to_next_level` whenever the profile is
/// observable outside the progression engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub experience_to_next_level: u64,
    pub stats: LifetimeStats,
    pub character: Character,
}

impl Profile {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let character = Character::starter(&user_id);
        Self {
            user_id,
            name: name.into(),
            level: 1,
            experience: 0,
            experience_to_next_level: STARTING_EXP_THRESHOLD,
            stats: LifetimeStats::default(),
            character,
        }
    }

    /// Leaderboard score of this profile: `experience * 10 + pickups * 5`.
    pub fn live_score(&self) -> u64 {
        self.experience
            .saturating_mul(SCORE_PER_EXP)
            .saturating_add(self.stats.total_pickups.saturating_mul(SCORE_PER_PICKUP))
    }
}

/// Raw input for a logged pickup. Not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupEvent {
    pub restaurant_name: String,
    pub distance_km: f64,
    /// Required to be positive, but does not influence rewards.
    pub order_value: f64,
    pub used_reusable_container: bool,
}

/// Immutable record created once per accepted pickup.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: String,
    pub restaurant_name: String,
    pub recorded_at: DateTime<Utc>,
    pub calories_burned: u64,
    pub money_saved: u64,
    pub carbon_reduced_kg: f64,
    pub points_earned: u64,
    pub used_reusable_container: bool,
}

/// Most-recent-first activity history with a fixed capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityRecord>,
    capacity: usize,
    next_seq: u64,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(MAX_ACTIVITY_HISTORY)
    }
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_seq: 1,
        }
    }

    /// Hands out the next record id for this log (`act_1`, `act_2`, ...).
    pub fn next_id(&mut self) -> String {
        let id = format!("act_{}", self.next_seq);
        self.next_seq += 1;
        id
    }

    /// Prepends a record, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, record: ActivityRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<ActivityRecord> {
        self.entries.iter().cloned().collect()
    }
}

/// A user that can be ranked or befriended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownUser {
    pub user_id: String,
    pub name: String,
}

impl KnownUser {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}

/// One row of ranking source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationEntry {
    pub user_id: String,
    pub name: String,
    pub score: u64,
}

/// A ranked leaderboard row. Derived on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: u32,
    pub user_id: String,
    pub name: String,
    pub score: u64,
}
