//! Applies a logged pickup to a profile and its activity history.

use super::leveling::{LevelUpResult, handle_leveling};
use super::rewards::{PickupRewards, calculate_rewards, validate_pickup};
use crate::config::ProgressionRules;
use crate::database::models::{ActivityLog, ActivityRecord, PickupEvent, Profile};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};

/// What a single pickup did to the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupOutcome {
    pub record: ActivityRecord,
    pub rewards: PickupRewards,
    pub level_up: LevelUpResult,
}

/// Validates `event`, derives its rewards and applies them to `profile` and `history`.
///
/// All values are computed before anything is written, so a rejected event
/// leaves both untouched.
pub fn apply_pickup(
    profile: &mut Profile,
    history: &mut ActivityLog,
    event: &PickupEvent,
    now: DateTime<Utc>,
    rules: &ProgressionRules,
) -> Result<PickupOutcome, ValidationError> {
    validate_pickup(event)?;

    let rewards = calculate_rewards(event, &rules.rewards);
    let level_up = handle_leveling(
        profile.level,
        profile.experience,
        profile.experience_to_next_level,
        rewards.points_earned,
        &rules.ladder,
    );

    let stats = &mut profile.stats;
    // Lifetime counters never decrease, so they stop at the type maximum.
    stats.total_pickups = stats.total_pickups.saturating_add(1);
    stats.total_calories_burned = stats
        .total_calories_burned
        .saturating_add(rewards.calories_burned);
    stats.total_money_saved = stats.total_money_saved.saturating_add(rewards.money_saved);
    stats.total_carbon_reduced_kg += rewards.carbon_reduced_kg;

    profile.level = level_up.new_level;
    profile.experience = level_up.new_experience;
    profile.experience_to_next_level = level_up.new_threshold;
    profile.character.unspent_stat_points = profile
        .character
        .unspent_stat_points
        .saturating_add(level_up.stat_points_granted);

    let record = ActivityRecord {
        id: history.next_id(),
        restaurant_name: event.restaurant_name.trim().to_string(),
        recorded_at: now,
        calories_burned: rewards.calories_burned,
        money_saved: rewards.money_saved,
        carbon_reduced_kg: rewards.carbon_reduced_kg,
        points_earned: rewards.points_earned,
        used_reusable_container: event.used_reusable_container,
    };
    history.push(record.clone());

    Ok(PickupOutcome {
        record,
        rewards,
        level_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(distance_km: f64) -> PickupEvent {
        PickupEvent {
            restaurant_name: "Burger King".into(),
            distance_km,
            order_value: 9000.0,
            used_reusable_container: false,
        }
    }

    #[test]
    fn rejected_event_changes_nothing() {
        let mut profile = Profile::new("1", "Kim");
        let mut history = ActivityLog::default();
        let before = (profile.clone(), history.clone());

        let res = apply_pickup(
            &mut profile,
            &mut history,
            &event(-1.0),
            Utc::now(),
            &ProgressionRules::default(),
        );
        assert!(res.is_err());
        assert_eq!((profile, history), before);
    }

    #[test]
    fn accepted_event_updates_stats_and_history() {
        let mut profile = Profile::new("1", "Kim");
        let mut history = ActivityLog::default();
        let now = Utc::now();

        let out = apply_pickup(
            &mut profile,
            &mut history,
            &event(1.0),
            now,
            &ProgressionRules::default(),
        )
        .unwrap();

        // 15 + 30 + 3
        assert_eq!(out.record.points_earned, 48);
        assert_eq!(out.record.recorded_at, now);
        assert_eq!(profile.stats.total_pickups, 1);
        assert_eq!(profile.stats.total_calories_burned, 30);
        assert_eq!(profile.stats.total_money_saved, 3000);
        assert_eq!(profile.experience, 48);
        assert_eq!(history.len(), 1);
        assert_eq!(history.iter().next(), Some(&out.record));
    }
}
