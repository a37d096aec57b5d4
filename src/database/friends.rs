//! Friend registry queries and updates.

use crate::database::init::MemoryStore;
use crate::database::models::KnownUser;
use crate::error::FriendError;
use tracing::instrument;

/// Adds a friend by nickname for the acting user.
#[instrument(level = "debug", skip(store))]
pub async fn add_friend(
    store: &MemoryStore,
    user_id: &str,
    display_name: &str,
    nickname: &str,
) -> Result<String, FriendError> {
    let handle = store.session(user_id, display_name).await;
    // Snapshot first: the directory lock is never held together with a session lock.
    let directory = store.directory_snapshot().await;
    let mut session = handle.lock().await;
    session.friends.add_friend(&directory, nickname)
}

/// The user's friends with their current names.
pub async fn list_friends(store: &MemoryStore, user_id: &str) -> Vec<KnownUser> {
    let Some(handle) = store.find_session(user_id).await else {
        return Vec::new();
    };
    let friends: Vec<KnownUser> = handle.lock().await.friends.iter().cloned().collect();
    let directory = store.directory_snapshot().await;
    friends
        .into_iter()
        .map(|f| directory.get(&f.user_id).cloned().unwrap_or(f))
        .collect()
}
