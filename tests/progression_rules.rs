//! Reward derivation, the experience ladder and the pickup engine.
use chrono::{Duration, Utc};
use pickup_quest::config::{LadderConfig, ProgressionRules, RewardConfig};
use pickup_quest::constants::MAX_DISTANCE_KM;
use pickup_quest::database::models::{ActivityLog, PickupEvent, Profile};
use pickup_quest::error::ValidationError;
use pickup_quest::progression::engine::apply_pickup;
use pickup_quest::progression::leveling::{handle_leveling, next_threshold};
use pickup_quest::progression::rewards::{calculate_rewards, round2};

fn pickup(distance_km: f64, reusable: bool) -> PickupEvent {
    PickupEvent {
        restaurant_name: "Mega Coffee".into(),
        distance_km,
        order_value: 12000.0,
        used_reusable_container: reusable,
    }
}

#[test]
fn worked_example_with_reusable_container() {
    let r = calculate_rewards(&pickup(1.2, true), &RewardConfig::default());
    assert_eq!(r.calories_burned, 36);
    assert_eq!(r.money_saved, 3000);
    assert_eq!(r.carbon_reduced_kg, 0.23);
    // 18 + 30 + 4.6
    assert_eq!(r.points_earned, 53);
}

#[test]
fn points_follow_the_weighted_sum() {
    let cfg = RewardConfig::default();
    for (km, reusable) in [(0.3, false), (1.0, true), (2.0, false), (4.75, true)] {
        let r = calculate_rewards(&pickup(km, reusable), &cfg);
        let expected = (r.calories_burned as f64 * 0.5
            + r.money_saved as f64 / 100.0
            + r.carbon_reduced_kg * 20.0)
            .round() as u64;
        assert_eq!(r.points_earned, expected, "{km} km");
        assert_eq!(r.money_saved, 3000);
    }
}

#[test]
fn reusable_container_only_adds_carbon() {
    let cfg = RewardConfig::default();
    let plain = calculate_rewards(&pickup(2.0, false), &cfg);
    let reusable = calculate_rewards(&pickup(2.0, true), &cfg);
    assert_eq!(plain.calories_burned, reusable.calories_burned);
    assert_eq!(plain.carbon_reduced_kg, 0.3);
    assert_eq!(reusable.carbon_reduced_kg, 0.35);
    assert_eq!(plain.points_earned, 66);
    assert_eq!(reusable.points_earned, 67);
}

#[test]
fn ladder_grows_by_half() {
    let ladder = LadderConfig::default();
    assert_eq!(next_threshold(100, &ladder), 150);
    assert_eq!(next_threshold(150, &ladder), 225);
    assert_eq!(next_threshold(225, &ladder), 338);
}

#[test]
fn exact_threshold_levels_up_with_zero_carry() {
    let res = handle_leveling(1, 50, 100, 50, &LadderConfig::default());
    assert!(res.did_level_up());
    assert_eq!(res.new_level, 2);
    assert_eq!(res.new_experience, 0);
    assert_eq!(res.new_threshold, 150);
    assert_eq!(res.stat_points_granted, 3);
}

#[test]
fn large_gain_cascades_through_levels() {
    // 260 - 100 = 160, 160 - 150 = 10
    let res = handle_leveling(1, 0, 100, 260, &LadderConfig::default());
    assert_eq!(res.new_level, 3);
    assert_eq!(res.levels_gained, 2);
    assert_eq!(res.new_experience, 10);
    assert_eq!(res.new_threshold, 225);
    assert_eq!(res.stat_points_granted, 6);
    assert!(res.new_experience < res.new_threshold);
}

#[test]
fn new_profile_defaults() {
    let p = Profile::new("42", "Walker");
    assert_eq!(p.level, 1);
    assert_eq!(p.experience, 0);
    assert_eq!(p.experience_to_next_level, 100);
    assert_eq!(p.character.name, "Picky");
    assert_eq!((p.character.attack, p.character.defense), (10, 8));
    assert_eq!(p.character.unspent_stat_points, 0);
    assert_eq!(p.character.skills.len(), 2);
    assert_eq!(p.stats.total_pickups, 0);
}

#[test]
fn two_pickups_cross_the_first_level() {
    let rules = ProgressionRules::default();
    let mut profile = Profile::new("1", "Kim");
    let mut log = ActivityLog::default();
    let now = Utc::now();

    let first = apply_pickup(&mut profile, &mut log, &pickup(1.2, true), now, &rules).unwrap();
    assert!(!first.level_up.did_level_up());
    assert_eq!(profile.experience, 53);

    let second = apply_pickup(
        &mut profile,
        &mut log,
        &pickup(1.2, true),
        now + Duration::minutes(5),
        &rules,
    )
    .unwrap();
    assert!(second.level_up.did_level_up());
    assert_eq!(profile.level, 2);
    assert_eq!(profile.experience, 6);
    assert_eq!(profile.experience_to_next_level, 150);
    assert_eq!(profile.character.unspent_stat_points, 3);
    assert_eq!(profile.stats.total_pickups, 2);
    assert_eq!(profile.stats.total_calories_burned, 72);
    assert!((profile.stats.total_carbon_reduced_kg - 0.46).abs() < 1e-9);

    let ids: Vec<&str> = log.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["act_2", "act_1"]);
}

#[test]
fn invalid_events_are_rejected_without_side_effects() {
    let rules = ProgressionRules::default();
    let mut profile = Profile::new("1", "Kim");
    let mut log = ActivityLog::default();
    apply_pickup(&mut profile, &mut log, &pickup(1.0, false), Utc::now(), &rules).unwrap();
    let before = (profile.clone(), log.clone());

    let mut blank = pickup(1.0, false);
    blank.restaurant_name = "   ".into();
    let mut zero_order = pickup(1.0, false);
    zero_order.order_value = 0.0;

    let cases = [
        (pickup(0.0, false), ValidationError::InvalidDistance(0.0)),
        (pickup(-2.5, true), ValidationError::InvalidDistance(-2.5)),
        (zero_order, ValidationError::InvalidOrderValue(0.0)),
        (blank, ValidationError::EmptyRestaurantName),
    ];
    for (event, expected) in cases {
        let err = apply_pickup(&mut profile, &mut log, &event, Utc::now(), &rules).unwrap_err();
        assert_eq!(err, expected);
        assert_eq!((profile.clone(), log.clone()), before);
    }

    let nan = pickup(f64::NAN, false);
    assert!(apply_pickup(&mut profile, &mut log, &nan, Utc::now(), &rules).is_err());
    assert_eq!(profile, before.0);
}

#[test]
fn history_keeps_the_twenty_most_recent() {
    let rules = ProgressionRules::default();
    let mut profile = Profile::new("1", "Kim");
    let mut log = ActivityLog::default();
    let start = Utc::now();
    for i in 0..25 {
        apply_pickup(
            &mut profile,
            &mut log,
            &pickup(0.5, false),
            start + Duration::minutes(i),
            &rules,
        )
        .unwrap();
    }
    assert_eq!(log.len(), 20);
    assert_eq!(log.iter().next().map(|a| a.id.as_str()), Some("act_25"));
    assert_eq!(log.iter().last().map(|a| a.id.as_str()), Some("act_6"));
    assert_eq!(profile.stats.total_pickups, 25);
}

#[test]
fn carbon_never_falls_below_the_distance_rate() {
    let cfg = RewardConfig::default();
    for step in 1..=2000 {
        let km = step as f64 * 0.05;
        let plain = calculate_rewards(&pickup(km, false), &cfg);
        let reusable = calculate_rewards(&pickup(km, true), &cfg);
        assert_eq!(plain.carbon_reduced_kg, round2(km * 0.15), "{km} km");
        assert!((plain.carbon_reduced_kg - km * 0.15).abs() <= 0.005 + 1e-9, "{km} km");
        assert!(reusable.carbon_reduced_kg >= km * 0.15, "{km} km");
        assert!(reusable.carbon_reduced_kg > plain.carbon_reduced_kg, "{km} km");
    }
}

#[test]
fn long_mixed_run_keeps_the_ladder_consistent() {
    let rules = ProgressionRules::default();
    let mut profile = Profile::new("1", "Kim");
    let mut log = ActivityLog::default();
    let start = Utc::now();
    let distances = [0.01, 0.4, 1.2, 3.0, 7.5, 25.0, MAX_DISTANCE_KM, 1e6, 1e18, f64::MAX];

    for i in 0..400 {
        let km = distances[i % distances.len()];
        let before = profile.clone();
        let res = apply_pickup(
            &mut profile,
            &mut log,
            &pickup(km, i % 3 == 0),
            start + Duration::minutes(i as i64),
            &rules,
        );

        if km > MAX_DISTANCE_KM {
            assert!(
                matches!(res, Err(ValidationError::DistanceTooLarge { .. })),
                "{km} km"
            );
            assert_eq!(profile, before);
            continue;
        }
        res.unwrap();
        assert!(profile.experience < profile.experience_to_next_level);
        assert!(profile.level >= before.level);
        assert_eq!(profile.stats.total_pickups, before.stats.total_pickups + 1);
        assert!(profile.stats.total_calories_burned >= before.stats.total_calories_burned);
        assert!(profile.stats.total_money_saved > before.stats.total_money_saved);
        assert!(profile.stats.total_carbon_reduced_kg >= before.stats.total_carbon_reduced_kg);
        assert!(
            profile.character.unspent_stat_points >= before.character.unspent_stat_points
        );
    }
    assert_eq!(log.len(), 20);
}
