//! Reward derivation for a single logged pickup.

use crate::config::RewardConfig;
use crate::constants::MAX_DISTANCE_KM;
use crate::database::models::PickupEvent;
use crate::error::ValidationError;

/// Everything a pickup is worth, derived from its distance and container choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupRewards {
    pub calories_burned: u64,
    pub money_saved: u64,
    pub carbon_reduced_kg: f64,
    pub points_earned: u64,
}

/// Rounds to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rejects input the engine must never see.
pub fn validate_pickup(event: &PickupEvent) -> Result<(), ValidationError> {
    if event.restaurant_name.trim().is_empty() {
        return Err(ValidationError::EmptyRestaurantName);
    }
    if !event.distance_km.is_finite() || event.distance_km <= 0.0 {
        return Err(ValidationError::InvalidDistance(event.distance_km));
    }
    if event.distance_km > MAX_DISTANCE_KM {
        return Err(ValidationError::DistanceTooLarge {
            max: MAX_DISTANCE_KM,
            got: event.distance_km,
        });
    }
    if !event.order_value.is_finite() || event.order_value <= 0.0 {
        return Err(ValidationError::InvalidOrderValue(event.order_value));
    }
    Ok(())
}

/// Derives the rewards for a pre-validated pickup.
///
/// Carbon is rounded once, after the reusable container bonus is added.
pub fn calculate_rewards(event: &PickupEvent, cfg: &RewardConfig) -> PickupRewards {
    let calories_burned = (event.distance_km * cfg.kcal_per_km).round() as u64;
    let money_saved = cfg.flat_money_saved;

    let mut carbon = event.distance_km * cfg.carbon_kg_per_km;
    if event.used_reusable_container {
        carbon += cfg.reusable_container_bonus_kg;
    }
    let carbon_reduced_kg = round2(carbon);

    let points = calories_burned as f64 * cfg.calorie_point_weight
        + money_saved as f64 / cfg.money_point_divisor
        + carbon_reduced_kg * cfg.carbon_point_weight;

    PickupRewards {
        calories_burned,
        money_saved,
        carbon_reduced_kg,
        points_earned: points.round() as u64,
    }
}
