//! Activity history queries.

use crate::database::init::MemoryStore;
use crate::database::models::ActivityRecord;

/// A user's activity history, most recent first. Empty for unknown users.
pub async fn list_activities(store: &MemoryStore, user_id: &str) -> Vec<ActivityRecord> {
    match store.find_session(user_id).await {
        Some(handle) => handle.lock().await.activities.to_vec(),
        None => Vec::new(),
    }
}

/// Prepends an externally built record to an existing user's history.
/// Returns `false` if the user has no session.
pub async fn append_activity(store: &MemoryStore, user_id: &str, record: ActivityRecord) -> bool {
    let Some(handle) = store.find_session(user_id).await else {
        return false;
    };
    handle.lock().await.activities.push(record);
    true
}
