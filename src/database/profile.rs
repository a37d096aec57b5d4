//! This module contains all functions for reading and updating a user's profile.
//! It is the single source of truth for creating, retrieving, and mutating progression data.

use crate::constants::MAX_NICKNAME_CHARS;
use crate::database::init::MemoryStore;
use crate::database::models::{Character, KnownUser, PickupEvent, Profile};
use crate::error::{InsufficientPointsError, ValidationError};
use crate::progression::allocation::{self, StatAllocation};
use crate::progression::engine::{self, PickupOutcome};
use chrono::{DateTime, Utc};
use tracing::instrument;

/// Retrieves a user's profile. Creates one if it doesn't exist.
pub async fn get_or_create_profile(store: &MemoryStore, user_id: &str, display_name: &str) -> Profile {
    let handle = store.session(user_id, display_name).await;
    let session = handle.lock().await;
    session.profile.clone()
}

pub async fn find_profile(store: &MemoryStore, user_id: &str) -> Option<Profile> {
    let handle = store.find_session(user_id).await?;
    let session = handle.lock().await;
    Some(session.profile.clone())
}

/// Overwrites the stored profile with `profile`, creating the session if needed.
pub async fn save_profile(store: &MemoryStore, profile: Profile) {
    let handle = store.session(&profile.user_id, &profile.name).await;
    let directory_entry = KnownUser::new(profile.user_id.clone(), profile.name.clone());
    handle.lock().await.profile = profile;
    store.update_directory(directory_entry).await;
}

/// Trims and checks a requested display name.
pub fn validate_nickname(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyNickname);
    }
    if name.chars().count() > MAX_NICKNAME_CHARS {
        return Err(ValidationError::NicknameTooLong {
            max: MAX_NICKNAME_CHARS,
        });
    }
    Ok(name.to_string())
}

/// Renames a user; the user directory follows so friends can find the new name.
#[instrument(level = "debug", skip(store))]
pub async fn rename_profile(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    new_name: &str,
) -> Result<Profile, ValidationError> {
    let name = validate_nickname(new_name)?;
    let handle = store.session(user_id, display_name).await;
    let profile = {
        let mut session = handle.lock().await;
        session.profile.name = name.clone();
        session.profile.clone()
    };
    store.update_directory(KnownUser::new(user_id, name)).await;
    Ok(profile)
}

/// Spends stat points under the user's session lock.
#[instrument(level = "debug", skip(store))]
pub async fn allocate_stat_points(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    points: StatAllocation,
) -> Result<Character, InsufficientPointsError> {
    let handle = store.session(user_id, display_name).await;
    let mut session = handle.lock().await;
    allocation::allocate_stat_points(&mut session.profile.character, points)?;
    Ok(session.profile.character.clone())
}

/// Applies a pickup to the user's profile and history as one step.
#[instrument(level = "debug", skip(store, event), fields(distance_km = event.distance_km))]
pub async fn record_pickup(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    event: &PickupEvent,
    now: DateTime<Utc>,
) -> Result<(PickupOutcome, Profile), ValidationError> {
    let handle = store.session(user_id, display_name).await;
    let mut session = handle.lock().await;
    let session = &mut *session;
    let outcome = engine::apply_pickup(
        &mut session.profile,
        &mut session.activities,
        event,
        now,
        store.rules(),
    )?;
    Ok((outcome, session.profile.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nickname_rules() {
        assert_eq!(validate_nickname("  Kim  "), Ok("Kim".to_string()));
        assert_eq!(validate_nickname("   "), Err(ValidationError::EmptyNickname));
        let long = "x".repeat(MAX_NICKNAME_CHARS + 1);
        assert_eq!(
            validate_nickname(&long),
            Err(ValidationError::NicknameTooLong {
                max: MAX_NICKNAME_CHARS
            })
        );
    }
}
