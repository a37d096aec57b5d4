//! Ranking service layer: loads the live profile and the cohort population,
//! then projects a fresh leaderboard. Nothing is cached; every call recomputes.

use super::repository::ProgressRepository;
use crate::database::models::{PopulationEntry, RankEntry};
use crate::progression::ranking::{Cohort, compute_rankings};
use tracing::{debug, instrument};

/// A projected leaderboard plus the viewer's own row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    pub cohort: Cohort,
    pub entries: Vec<RankEntry>,
    pub viewer: Option<RankEntry>,
}

impl Leaderboard {
    pub fn top(&self, limit: usize) -> &[RankEntry] {
        &self.entries[..self.entries.len().min(limit)]
    }
}

/// Returns `None` if the viewer has no profile yet.
#[instrument(level = "debug", skip(repo, cohort), fields(cohort = cohort.key()))]
pub async fn get_leaderboard<R>(repo: &R, user_id: &str, cohort: Cohort) -> Option<Leaderboard>
where
    R: ProgressRepository + ?Sized,
{
    let Some(profile) = repo.load_profile(user_id).await else {
        debug!(target: "ranking.refresh", "no profile for viewer");
        return None;
    };
    let population = repo.list_population_scores(user_id, cohort).await;
    let current = PopulationEntry {
        user_id: profile.user_id.clone(),
        name: profile.name.clone(),
        score: profile.live_score(),
    };

    let entries = compute_rankings(&population, &current);
    let viewer = entries.iter().find(|e| e.user_id == user_id).cloned();
    debug!(
        target: "ranking.refresh",
        size = entries.len(),
        viewer_rank = ?viewer.as_ref().map(|v| v.rank),
    );
    Some(Leaderboard {
        cohort,
        entries,
        viewer,
    })
}
