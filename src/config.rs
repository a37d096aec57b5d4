//! Runtime configuration: bot settings read from the environment, plus the
//! tunable reward and ladder rules used by the progression engine.

use crate::constants::*;
use thiserror::Error;

/// Coefficients used to turn a pickup into calories, savings, carbon and points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardConfig {
    pub kcal_per_km: f64,
    pub flat_money_saved: u64,
    pub carbon_kg_per_km: f64,
    pub reusable_container_bonus_kg: f64,
    pub calorie_point_weight: f64,
    pub money_point_divisor: f64,
    pub carbon_point_weight: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            kcal_per_km: KCAL_PER_KM,
            flat_money_saved: FLAT_MONEY_SAVED,
            carbon_kg_per_km: CARBON_KG_PER_KM,
            reusable_container_bonus_kg: REUSABLE_CONTAINER_BONUS_KG,
            calorie_point_weight: CALORIE_POINT_WEIGHT,
            money_point_divisor: MONEY_POINT_DIVISOR,
            carbon_point_weight: CARBON_POINT_WEIGHT,
        }
    }
}

/// Shape of the experience ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderConfig {
    pub starting_threshold: u64,
    pub growth_factor: f64,
    pub stat_points_per_level: u32,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            starting_threshold: STARTING_EXP_THRESHOLD,
            growth_factor: EXP_THRESHOLD_GROWTH,
            stat_points_per_level: STAT_POINTS_PER_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressionRules {
    pub rewards: RewardConfig,
    pub ladder: LadderConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected `{0}` in the environment or .env file")]
    Missing(&'static str),
    #[error("`{name}` must be a valid number (got `{value}`)")]
    InvalidNumber { name: &'static str, value: String },
}

/// Settings the bot binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub token: String,
    pub guild_id: u64,
    pub prefix: String,
    /// Seed for competitor scores. `None` draws from OS entropy.
    pub ranking_seed: Option<u64>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be tested without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let guild_raw = lookup("SERVER_ID").ok_or(ConfigError::Missing("SERVER_ID"))?;
        let guild_id = parse_number("SERVER_ID", &guild_raw)?;
        let prefix = lookup("BOT_PREFIX")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "!".to_string());
        let ranking_seed = match lookup("RANKING_SEED") {
            Some(raw) => Some(parse_number("RANKING_SEED", &raw)?),
            None => None,
        };
        Ok(Self {
            token,
            guild_id,
            prefix,
            ranking_seed,
        })
    }
}

fn parse_number(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_prefix_and_seed() {
        let cfg =
            BotConfig::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc"), ("SERVER_ID", "42")]))
                .unwrap();
        assert_eq!(cfg.guild_id, 42);
        assert_eq!(cfg.prefix, "!");
        assert_eq!(cfg.ranking_seed, None);
    }

    #[test]
    fn reads_seed_and_prefix() {
        let cfg = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("SERVER_ID", "42"),
            ("BOT_PREFIX", "$"),
            ("RANKING_SEED", "7"),
        ]))
        .unwrap();
        assert_eq!(cfg.prefix, "$");
        assert_eq!(cfg.ranking_seed, Some(7));
    }

    #[test]
    fn missing_token_and_bad_guild() {
        assert_eq!(
            BotConfig::from_lookup(lookup_from(&[("SERVER_ID", "1")])),
            Err(ConfigError::Missing("DISCORD_TOKEN"))
        );
        assert_eq!(
            BotConfig::from_lookup(lookup_from(&[("DISCORD_TOKEN", "t"), ("SERVER_ID", "x1")])),
            Err(ConfigError::InvalidNumber {
                name: "SERVER_ID",
                value: "x1".into()
            })
        );
    }

    #[test]
    fn default_rules_match_constants() {
        let rules = ProgressionRules::default();
        assert_eq!(rules.rewards.flat_money_saved, 3000);
        assert_eq!(rules.ladder.stat_points_per_level, 3);
        assert_eq!(rules.ladder.growth_factor, 1.5);
    }
}
