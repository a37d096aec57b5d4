//! Progress service layer: the write-side entry points used by commands.
//! Each call runs under the acting user's session lock and logs its outcome.

use crate::database::models::{Character, PickupEvent, Profile};
use crate::database::{self, MemoryStore};
use crate::error::{FriendError, InsufficientPointsError, ValidationError};
use crate::progression::allocation::StatAllocation;
use crate::progression::engine::PickupOutcome;
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

#[instrument(level = "debug", skip(store, event), fields(restaurant = %event.restaurant_name))]
pub async fn log_pickup(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    event: &PickupEvent,
    now: DateTime<Utc>,
) -> Result<(PickupOutcome, Profile), ValidationError> {
    match database::profile::record_pickup(store, user_id, display_name, event, now).await {
        Ok((outcome, profile)) => {
            info!(
                target: "progression.pickup",
                user_id,
                points = outcome.record.points_earned,
                calories = outcome.record.calories_burned,
                carbon_kg = outcome.record.carbon_reduced_kg,
                "pickup logged"
            );
            if outcome.level_up.did_level_up() {
                info!(
                    target: "progression.level_up",
                    user_id,
                    level = profile.level,
                    levels_gained = outcome.level_up.levels_gained,
                    stat_points = outcome.level_up.stat_points_granted,
                    "level up"
                );
            }
            Ok((outcome, profile))
        }
        Err(e) => {
            warn!(target: "progression.pickup", user_id, error = %e, "pickup rejected");
            Err(e)
        }
    }
}

#[instrument(level = "debug", skip(store))]
pub async fn allocate_points(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    points: StatAllocation,
) -> Result<Character, InsufficientPointsError> {
    let result =
        database::profile::allocate_stat_points(store, user_id, display_name, points).await;
    if let Err(e) = &result {
        warn!(target: "progression.allocate", user_id, error = %e, "allocation rejected");
    }
    result
}

pub async fn rename(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    new_name: &str,
) -> Result<Profile, ValidationError> {
    let result = database::profile::rename_profile(store, user_id, display_name, new_name).await;
    match &result {
        Ok(p) => info!(target: "profile.rename", user_id, name = %p.name, "renamed"),
        Err(e) => warn!(target: "profile.rename", user_id, error = %e, "rename rejected"),
    }
    result
}

pub async fn add_friend(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    nickname: &str,
) -> Result<String, FriendError> {
    let result = database::friends::add_friend(store, user_id, display_name, nickname).await;
    match &result {
        Ok(_) => info!(target: "friends.add", user_id, nickname, "friend added"),
        Err(e) => warn!(target: "friends.add", user_id, nickname, error = %e, "add friend rejected"),
    }
    result
}
