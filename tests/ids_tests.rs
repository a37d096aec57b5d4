use pickup_quest::interactions::ids::{
    CHARACTER_ADD_ATTACK, CHARACTER_ADD_DEFENSE, CHARACTER_REFRESH, HELP_SELECT_COMMAND,
    LEADERBOARD_FRIENDS, STATS_MONEY, family, leaderboard_id, parse_character_id,
    parse_leaderboard_id, parse_stats_id, stats_id,
};
use pickup_quest::progression::allocation::StatAllocation;
use pickup_quest::progression::ranking::Cohort;
use pickup_quest::progression::summary::StatDetail;

#[test]
fn leaderboard_ids_round_trip() {
    for cohort in Cohort::ALL {
        assert_eq!(parse_leaderboard_id(leaderboard_id(cohort)), Some(cohort));
    }
    assert_eq!(parse_leaderboard_id(LEADERBOARD_FRIENDS), Some(Cohort::Friends));
    assert_eq!(parse_leaderboard_id("leaderboard_monthly"), None);
}

#[test]
fn stats_ids_round_trip() {
    for detail in [StatDetail::CaloriesBurned, StatDetail::MoneySaved] {
        assert_eq!(parse_stats_id(stats_id(detail)), Some(detail));
    }
    assert_eq!(parse_stats_id(STATS_MONEY), Some(StatDetail::MoneySaved));
    assert_eq!(parse_stats_id("stats_carbon"), None);
}

#[test]
fn character_buttons_spend_one_point() {
    assert_eq!(
        parse_character_id(CHARACTER_ADD_ATTACK),
        Some(StatAllocation {
            attack: 1,
            defense: 0
        })
    );
    assert_eq!(
        parse_character_id(CHARACTER_ADD_DEFENSE).map(|a| a.total()),
        Some(1)
    );
    assert_eq!(parse_character_id(CHARACTER_REFRESH), None);
}

#[test]
fn families_route_by_first_segment() {
    assert_eq!(family(LEADERBOARD_FRIENDS), "leaderboard");
    assert_eq!(family(CHARACTER_ADD_ATTACK), "character");
    assert_eq!(family(STATS_MONEY), "stats");
    assert_eq!(family(HELP_SELECT_COMMAND), "help");
    assert_eq!(family(""), "");
}
