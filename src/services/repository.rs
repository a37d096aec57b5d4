//! Storage boundary used by the read-side services.
//!
//! The in-memory store is the only implementation today; a persistent backend
//! would implement the same trait.

use crate::database::models::{ActivityRecord, PopulationEntry, Profile};
use crate::database::{self, MemoryStore};
use crate::progression::ranking::Cohort;
use async_trait::async_trait;

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn load_profile(&self, user_id: &str) -> Option<Profile>;
    async fn save_profile(&self, profile: Profile);
    async fn list_population_scores(&self, user_id: &str, cohort: Cohort) -> Vec<PopulationEntry>;
    /// Returns `false` if the user is unknown to the repository.
    async fn append_activity(&self, user_id: &str, record: ActivityRecord) -> bool;
    async fn list_activities(&self, user_id: &str) -> Vec<ActivityRecord>;
}

#[async_trait]
impl ProgressRepository for MemoryStore {
    async fn load_profile(&self, user_id: &str) -> Option<Profile> {
        database::profile::find_profile(self, user_id).await
    }

    async fn save_profile(&self, profile: Profile) {
        database::profile::save_profile(self, profile).await
    }

    async fn list_population_scores(&self, user_id: &str, cohort: Cohort) -> Vec<PopulationEntry> {
        database::leaderboard::list_population_scores(self, user_id, cohort).await
    }

    async fn append_activity(&self, user_id: &str, record: ActivityRecord) -> bool {
        database::activity::append_activity(self, user_id, record).await
    }

    async fn list_activities(&self, user_id: &str) -> Vec<ActivityRecord> {
        database::activity::list_activities(self, user_id).await
    }
}
