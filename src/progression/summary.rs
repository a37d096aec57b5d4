//! Read-only summaries over an activity history: the weekly share card and
//! per-stat breakdowns.

use crate::constants::WEEKLY_WINDOW_DAYS;
use crate::database::models::ActivityRecord;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklySummary {
    pub pickups: u32,
    pub calories_burned: u64,
    pub money_saved: u64,
    pub carbon_reduced_kg: f64,
}

/// Sums the activities recorded strictly after `now - 7 days`.
pub fn weekly_summary<'a, I>(activities: I, now: DateTime<Utc>) -> WeeklySummary
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let cutoff = now - Duration::days(WEEKLY_WINDOW_DAYS);
    activities
        .into_iter()
        .filter(|a| a.recorded_at > cutoff)
        .fold(WeeklySummary::default(), |mut acc, a| {
            acc.pickups += 1;
            acc.calories_burned += a.calories_burned;
            acc.money_saved += a.money_saved;
            acc.carbon_reduced_kg += a.carbon_reduced_kg;
            acc
        })
}

/// Stats that have a per-activity breakdown view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatDetail {
    CaloriesBurned,
    MoneySaved,
}

impl StatDetail {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CaloriesBurned => "🔥 Calories Burned",
            Self::MoneySaved => "💸 Money Saved",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::CaloriesBurned => "kcal",
            Self::MoneySaved => "won",
        }
    }

    pub fn value_of(&self, activity: &ActivityRecord) -> u64 {
        match self {
            Self::CaloriesBurned => activity.calories_burned,
            Self::MoneySaved => activity.money_saved,
        }
    }
}

/// Activities with a positive value for `detail`, in history order.
pub fn stat_breakdown<'a, I>(activities: I, detail: StatDetail) -> Vec<(&'a ActivityRecord, u64)>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    activities
        .into_iter()
        .map(|a| (a, detail.value_of(a)))
        .filter(|(_, v)| *v > 0)
        .collect()
}
