//! This module lists the population a leaderboard is built from.

use crate::database::friends::list_friends;
use crate::database::init::MemoryStore;
use crate::database::models::{KnownUser, PopulationEntry};
use crate::progression::ranking::Cohort;

/// Lists `{user_id, name, score}` rows for a cohort as seen by `user_id`.
///
/// Users with a live session contribute their live score; everyone else gets a
/// score from the store's score source. Must not be called while holding a
/// session lock.
pub async fn list_population_scores(
    store: &MemoryStore,
    user_id: &str,
    cohort: Cohort,
) -> Vec<PopulationEntry> {
    let members: Vec<KnownUser> = match cohort {
        Cohort::All | Cohort::Weekly => {
            let mut members = store.residents().to_vec();
            let directory = store.directory_snapshot().await;
            members.extend(
                directory
                    .iter()
                    .filter(|u| !store.is_resident(&u.user_id))
                    .cloned(),
            );
            members
        }
        Cohort::Friends => list_friends(store, user_id).await,
    };

    let mut population = Vec::with_capacity(members.len());
    for member in members {
        population.push(score_member(store, member).await);
    }
    population
}

async fn score_member(store: &MemoryStore, member: KnownUser) -> PopulationEntry {
    if let Some(handle) = store.find_session(&member.user_id).await {
        let session = handle.lock().await;
        return PopulationEntry {
            user_id: member.user_id,
            name: session.profile.name.clone(),
            score: session.profile.live_score(),
        };
    }
    let score = store.external_score(&member.user_id).await;
    PopulationEntry {
        user_id: member.user_id,
        name: member.name,
        score,
    }
}
