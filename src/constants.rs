// Central constants for rewards, the experience ladder and limits.

// Reward derivation per logged pickup.
pub const KCAL_PER_KM: f64 = 30.0; // walking
pub const FLAT_MONEY_SAVED: u64 = 3000; // assumed delivery fee, in won
pub const CARBON_KG_PER_KM: f64 = 0.15; // car emissions avoided
pub const REUSABLE_CONTAINER_BONUS_KG: f64 = 0.05;

// Point weighting: calories * 0.5 + money / 100 + carbon * 20
pub const CALORIE_POINT_WEIGHT: f64 = 0.5;
pub const MONEY_POINT_DIVISOR: f64 = 100.0;
pub const CARBON_POINT_WEIGHT: f64 = 20.0;

// Experience ladder.
pub const STARTING_EXP_THRESHOLD: u64 = 100;
pub const EXP_THRESHOLD_GROWTH: f64 = 1.5;
pub const STAT_POINTS_PER_LEVEL: u32 = 3;

// Ranking score of a live profile: experience * 10 + pickups * 5
pub const SCORE_PER_EXP: u64 = 10;
pub const SCORE_PER_PICKUP: u64 = 5;
/// Competitor scores drawn by the random score source fall in this range.
pub const RESIDENT_SCORE_MIN: u64 = 500;
pub const RESIDENT_SCORE_MAX: u64 = 5500;

// Limits
/// Longest walk a single pickup may log.
pub const MAX_DISTANCE_KM: f64 = 100.0;
pub const MAX_ACTIVITY_HISTORY: usize = 20;
pub const MAX_NICKNAME_CHARS: usize = 32;
pub const WEEKLY_WINDOW_DAYS: i64 = 7;
pub const LEADERBOARD_LIMIT: usize = 10;
/// Number of mock residents every new user starts out befriended with.
pub const STARTER_FRIEND_COUNT: usize = 3;

// Starting character.
pub const STARTER_CHARACTER_NAME: &str = "Picky";
pub const STARTER_ATTACK: u32 = 10;
pub const STARTER_DEFENSE: u32 = 8;
pub const STARTER_MODEL_URL: &str =
    "https://cdn.glitch.global/4835a878-1a2c-4545-9fce-05c56bde802b/puffy_dragon.glb";
