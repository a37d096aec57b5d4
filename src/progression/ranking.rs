//! Contains the cohort definitions and the ranking projector.

use crate::constants::{RESIDENT_SCORE_MAX, RESIDENT_SCORE_MIN};
use crate::database::models::{PopulationEntry, RankEntry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// A named population subset that can be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cohort {
    All,
    Friends,
    Weekly,
}

impl Cohort {
    pub const ALL: [Cohort; 3] = [Cohort::All, Cohort::Friends, Cohort::Weekly];

    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "🏘️ Neighbourhood Ranking",
            Self::Friends => "🤝 Friends Ranking",
            Self::Weekly => "📅 Weekly Ranking",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Friends => "friends",
            Self::Weekly => "weekly",
        }
    }
}

impl FromStr for Cohort {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "local" => Ok(Self::All),
            "friends" | "f" => Ok(Self::Friends),
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            _ => Err(()),
        }
    }
}

/// Supplies scores for users who have no live profile in this process.
pub trait ScoreSource: Send {
    fn score_for(&mut self, user_id: &str) -> u64;
}

/// Draws a fresh score on every call.
pub struct RandomScores {
    rng: StdRng,
    min: u64,
    max: u64,
}

impl RandomScores {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            min: RESIDENT_SCORE_MIN,
            max: RESIDENT_SCORE_MAX,
        }
    }
}

impl ScoreSource for RandomScores {
    fn score_for(&mut self, _user_id: &str) -> u64 {
        self.rng.random_range(self.min..self.max)
    }
}

/// Fixed score table, for tests and reproducible demos.
#[derive(Debug, Clone, Default)]
pub struct FixedScores {
    scores: HashMap<String, u64>,
    fallback: u64,
}

impl FixedScores {
    pub fn new(fallback: u64) -> Self {
        Self {
            scores: HashMap::new(),
            fallback,
        }
    }

    pub fn with(mut self, user_id: impl Into<String>, score: u64) -> Self {
        self.scores.insert(user_id.into(), score);
        self
    }
}

impl ScoreSource for FixedScores {
    fn score_for(&mut self, user_id: &str) -> u64 {
        self.scores.get(user_id).copied().unwrap_or(self.fallback)
    }
}

/// Merges the current user's live score into `population` and ranks it.
///
/// A stale entry for the current user is replaced in place, otherwise the user
/// is appended. Duplicate ids keep their first occurrence. The sort is stable
/// and descending, ranks run 1..=n in sorted order, so ties keep input order.
/// Neither input is modified.
pub fn compute_rankings(population: &[PopulationEntry], current: &PopulationEntry) -> Vec<RankEntry> {
    let mut seen = HashSet::new();
    let mut merged: Vec<&PopulationEntry> = Vec::with_capacity(population.len() + 1);
    for entry in population {
        if !seen.insert(entry.user_id.as_str()) {
            continue;
        }
        if entry.user_id == current.user_id {
            merged.push(current);
        } else {
            merged.push(entry);
        }
    }
    if !seen.contains(current.user_id.as_str()) {
        merged.push(current);
    }

    merged.sort_by(|a, b| b.score.cmp(&a.score));

    merged
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankEntry {
            rank: i as u32 + 1,
            user_id: entry.user_id.clone(),
            name: entry.name.clone(),
            score: entry.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: u64) -> PopulationEntry {
        PopulationEntry {
            user_id: id.into(),
            name: id.to_uppercase(),
            score,
        }
    }

    #[test]
    fn seeded_scores_repeat_and_stay_in_range() {
        let mut a = RandomScores::seeded(9);
        let mut b = RandomScores::seeded(9);
        for _ in 0..50 {
            let x = a.score_for("resident_2");
            assert_eq!(x, b.score_for("resident_2"));
            assert!((RESIDENT_SCORE_MIN..RESIDENT_SCORE_MAX).contains(&x));
        }
    }

    #[test]
    fn fixed_scores_fall_back() {
        let mut s = FixedScores::new(1).with("a", 10);
        assert_eq!(s.score_for("a"), 10);
        assert_eq!(s.score_for("b"), 1);
    }

    #[test]
    fn stale_entry_replaced_in_place() {
        let population = vec![entry("a", 50), entry("me", 999), entry("b", 50)];
        let ranked = compute_rankings(&population, &entry("me", 50));
        let ids: Vec<&str> = ranked.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "me", "b"]);
        assert_eq!(ranked[1].score, 50);
    }

    #[test]
    fn cohort_parsing() {
        assert_eq!("weekly".parse::<Cohort>(), Ok(Cohort::Weekly));
        assert_eq!("local".parse::<Cohort>(), Ok(Cohort::All));
        assert!("monthly".parse::<Cohort>().is_err());
    }
}
