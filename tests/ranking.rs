//! Properties of the ranking projector.
use pickup_quest::database::models::PopulationEntry;
use pickup_quest::progression::ranking::compute_rankings;

fn entry(id: &str, score: u64) -> PopulationEntry {
    PopulationEntry {
        user_id: id.into(),
        name: format!("name-{id}"),
        score,
    }
}

fn population() -> Vec<PopulationEntry> {
    vec![
        entry("resident_2", 3200),
        entry("resident_3", 800),
        entry("resident_4", 5100),
        entry("resident_5", 800),
    ]
}

#[test]
fn sorted_descending_with_one_based_ranks() {
    let ranked = compute_rankings(&population(), &entry("me", 1500));
    assert_eq!(ranked.len(), 5);
    for (i, row) in ranked.iter().enumerate() {
        assert_eq!(row.rank as usize, i + 1);
    }
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(ranked[0].user_id, "resident_4");
    assert_eq!(ranked[2].user_id, "me");
}

#[test]
fn ties_keep_input_order() {
    let ranked = compute_rankings(&population(), &entry("me", 800));
    let tail: Vec<&str> = ranked[2..].iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(tail, vec!["resident_3", "resident_5", "me"]);
    assert_eq!(ranked[4].rank, 5);
}

#[test]
fn current_user_appears_once_with_live_score() {
    let mut pop = population();
    pop.push(entry("me", 9999));
    let ranked = compute_rankings(&pop, &entry("me", 100));
    assert_eq!(ranked.len(), 5);
    let mine: Vec<_> = ranked.iter().filter(|r| r.user_id == "me").collect();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].score, 100);
    assert_eq!(mine[0].rank, 5);
}

#[test]
fn duplicate_ids_keep_first_occurrence() {
    let pop = vec![entry("a", 10), entry("b", 20), entry("a", 500)];
    let ranked = compute_rankings(&pop, &entry("me", 0));
    assert_eq!(ranked.len(), 3);
    let a = ranked.iter().find(|r| r.user_id == "a").unwrap();
    assert_eq!(a.score, 10);
}

#[test]
fn inputs_are_not_modified() {
    let pop = population();
    let snapshot = pop.clone();
    let me = entry("me", 1);
    let _ = compute_rankings(&pop, &me);
    assert_eq!(pop, snapshot);
    assert_eq!(me, entry("me", 1));
}

#[test]
fn empty_population_ranks_only_the_viewer() {
    let ranked = compute_rankings(&[], &entry("me", 0));
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[0].name, "name-me");
}
