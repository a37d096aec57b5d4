//! End-to-end flows through the in-memory store and the service layer.
use chrono::Utc;
use pickup_quest::database::models::{ActivityRecord, PickupEvent};
use pickup_quest::database::{self, MemoryStore};
use pickup_quest::error::{FriendError, ValidationError};
use pickup_quest::progression::allocation::StatAllocation;
use pickup_quest::progression::ranking::{Cohort, FixedScores};
use pickup_quest::services::{self, ProgressRepository};
use std::sync::Arc;

fn store_with_scores(fallback: u64) -> MemoryStore {
    MemoryStore::new(Box::new(
        FixedScores::new(fallback).with("resident_2", 9000),
    ))
}

fn walk(km: f64) -> PickupEvent {
    PickupEvent {
        restaurant_name: "Golden Olive Chicken".into(),
        distance_km: km,
        order_value: 20000.0,
        used_reusable_container: true,
    }
}

#[tokio::test]
async fn pickup_updates_profile_and_history() {
    let store = store_with_scores(0);
    let (outcome, profile) =
        services::progress::log_pickup(&store, "100", "Kim", &walk(1.2), Utc::now())
            .await
            .unwrap();
    assert_eq!(outcome.record.points_earned, 53);
    assert_eq!(profile.experience, 53);

    let loaded = store.load_profile("100").await.unwrap();
    assert_eq!(loaded, profile);
    let history = store.list_activities("100").await;
    assert_eq!(history, vec![outcome.record]);
}

#[tokio::test]
async fn rejected_pickup_leaves_the_store_untouched() {
    let store = store_with_scores(0);
    services::progress::log_pickup(&store, "100", "Kim", &walk(1.0), Utc::now())
        .await
        .unwrap();
    let before = store.load_profile("100").await.unwrap();

    let err = services::progress::log_pickup(&store, "100", "Kim", &walk(0.0), Utc::now())
        .await
        .unwrap_err();
    assert_eq!(err, ValidationError::InvalidDistance(0.0));
    assert_eq!(store.load_profile("100").await.unwrap(), before);
    assert_eq!(store.list_activities("100").await.len(), 1);

    let err = services::progress::log_pickup(&store, "100", "Kim", &walk(1e18), Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, ValidationError::DistanceTooLarge { .. }));
    assert_eq!(store.load_profile("100").await.unwrap(), before);
}

#[tokio::test]
async fn allocation_is_all_or_nothing() {
    let store = store_with_scores(0);
    // 195 + 30 + 40 = 265 points in one go: two level ups, six stat points.
    let (_, profile) =
        services::progress::log_pickup(&store, "100", "Kim", &walk(13.0), Utc::now())
            .await
            .unwrap();
    assert_eq!(profile.level, 3);
    assert_eq!(profile.character.unspent_stat_points, 6);

    let character = services::progress::allocate_points(
        &store,
        "100",
        "Kim",
        StatAllocation {
            attack: 4,
            defense: 2,
        },
    )
    .await
    .unwrap();
    assert_eq!((character.attack, character.defense), (14, 10));
    assert_eq!(character.unspent_stat_points, 0);

    let err = services::progress::allocate_points(
        &store,
        "100",
        "Kim",
        StatAllocation {
            attack: 1,
            defense: 0,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.requested, 1);
    assert_eq!(err.available, 0);
    let after = store.load_profile("100").await.unwrap();
    assert_eq!((after.character.attack, after.character.defense), (14, 10));
}

#[tokio::test]
async fn neighbourhood_ranking_includes_residents_and_viewer() {
    let store = store_with_scores(1000);
    services::progress::log_pickup(&store, "100", "Kim", &walk(1.2), Utc::now())
        .await
        .unwrap();

    let board = services::ranking::get_leaderboard(&store, "100", Cohort::All)
        .await
        .unwrap();
    assert_eq!(board.entries.len(), 8);
    assert_eq!(board.entries[0].user_id, "resident_2");
    let viewer = board.viewer.as_ref().unwrap();
    // 53 exp * 10 + 1 pickup * 5
    assert_eq!(viewer.score, 535);
    assert_eq!(viewer.rank, 8);
    assert_eq!(board.top(3).len(), 3);
}

#[tokio::test]
async fn leaderboard_needs_a_profile() {
    let store = store_with_scores(0);
    assert!(
        services::ranking::get_leaderboard(&store, "ghost", Cohort::All)
            .await
            .is_none()
    );
}

#[tokio::test]
async fn friends_ranking_starts_with_three_residents() {
    let store = store_with_scores(0);
    database::profile::get_or_create_profile(&store, "100", "Kim").await;
    let board = services::ranking::get_leaderboard(&store, "100", Cohort::Friends)
        .await
        .unwrap();
    let mut ids: Vec<&str> = board.entries.iter().map(|e| e.user_id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["100", "resident_2", "resident_3", "resident_4"]);
}

#[tokio::test]
async fn friends_see_each_others_live_scores_and_renames() {
    let store = store_with_scores(0);
    services::progress::log_pickup(&store, "200", "Lee", &walk(2.0), Utc::now())
        .await
        .unwrap();
    let msg = services::progress::add_friend(&store, "100", "Kim", "Lee")
        .await
        .unwrap();
    assert_eq!(msg, "Added Lee to your friends.");

    let board = services::ranking::get_leaderboard(&store, "100", Cohort::Friends)
        .await
        .unwrap();
    let lee = board.entries.iter().find(|e| e.user_id == "200").unwrap();
    assert_eq!(lee.score, store.load_profile("200").await.unwrap().live_score());

    services::progress::rename(&store, "200", "Lee", "  Walker Lee ")
        .await
        .unwrap();
    let friends = database::friends::list_friends(&store, "100").await;
    assert!(friends.iter().any(|f| f.name == "Walker Lee"));

    // The directory follows the rename.
    let err = services::progress::add_friend(&store, "300", "Choi", "Lee")
        .await
        .unwrap_err();
    assert_eq!(err, FriendError::NotFound("Lee".into()));
    services::progress::add_friend(&store, "300", "Choi", "Walker Lee")
        .await
        .unwrap();
}

#[tokio::test]
async fn friend_errors() {
    let store = store_with_scores(0);
    assert_eq!(
        services::progress::add_friend(&store, "100", "Kim", "Kim").await,
        Err(FriendError::SelfReference)
    );
    assert_eq!(
        services::progress::add_friend(&store, "100", "Kim", "ParkBaedal").await,
        Err(FriendError::Duplicate("ParkBaedal".into()))
    );
}

#[tokio::test]
async fn adding_your_own_shared_name_is_rejected() {
    let store = store_with_scores(0);
    database::profile::get_or_create_profile(&store, "100", "Kim").await;
    database::profile::get_or_create_profile(&store, "200", "Kim").await;

    assert_eq!(
        services::progress::add_friend(&store, "200", "Kim", "Kim").await,
        Err(FriendError::SelfReference)
    );
    assert!(
        !database::friends::list_friends(&store, "200")
            .await
            .iter()
            .any(|f| f.user_id == "100")
    );
}

#[tokio::test]
async fn invalid_rename_keeps_the_old_name() {
    let store = store_with_scores(0);
    database::profile::get_or_create_profile(&store, "100", "Kim").await;
    let err = services::progress::rename(&store, "100", "Kim", "   ")
        .await
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyNickname);
    assert_eq!(store.load_profile("100").await.unwrap().name, "Kim");
}

#[tokio::test]
async fn repository_round_trips() {
    let store = store_with_scores(0);
    let repo: &dyn ProgressRepository = &store;

    let record = ActivityRecord {
        id: "act_x".into(),
        restaurant_name: "Bonjuk".into(),
        recorded_at: Utc::now(),
        calories_burned: 10,
        money_saved: 3000,
        carbon_reduced_kg: 0.05,
        points_earned: 36,
        used_reusable_container: false,
    };
    assert!(!repo.append_activity("nobody", record.clone()).await);

    let mut profile = database::profile::get_or_create_profile(&store, "100", "Kim").await;
    profile.experience = 42;
    repo.save_profile(profile.clone()).await;
    assert_eq!(repo.load_profile("100").await, Some(profile));

    assert!(repo.append_activity("100", record.clone()).await);
    assert_eq!(repo.list_activities("100").await, vec![record]);

    let all = repo.list_population_scores("100", Cohort::All).await;
    assert_eq!(all.len(), 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_pickups_are_serialized_per_user() {
    let store = Arc::new(store_with_scores(0));
    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let user = if i % 2 == 0 { "100" } else { "200" };
            services::progress::log_pickup(&store, user, user, &walk(0.5), Utc::now())
                .await
                .unwrap();
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    for user in ["100", "200"] {
        let profile = store.load_profile(user).await.unwrap();
        assert_eq!(profile.stats.total_pickups, 10);
        assert_eq!(store.list_activities(user).await.len(), 10);
    }
}
