//! Friend registry rules and the order they are checked in.
use pickup_quest::database::models::KnownUser;
use pickup_quest::error::FriendError;
use pickup_quest::progression::friends::{FriendRegistry, UserDirectory};

fn directory() -> UserDirectory {
    UserDirectory::new(vec![
        KnownUser::new("1", "Kim"),
        KnownUser::new("resident_2", "ParkBaedal"),
        KnownUser::new("resident_3", "LeePojang"),
    ])
}

#[test]
fn adds_by_exact_nickname() {
    let dir = directory();
    let mut reg = FriendRegistry::new("1");
    let msg = reg.add_friend(&dir, "ParkBaedal").unwrap();
    assert_eq!(msg, "Added ParkBaedal to your friends.");
    assert!(reg.contains("resident_2"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn own_nickname_is_self_reference_not_not_found() {
    let dir = directory();
    let mut reg = FriendRegistry::new("1");
    assert_eq!(reg.add_friend(&dir, "Kim"), Err(FriendError::SelfReference));
    assert!(reg.is_empty());
}

#[test]
fn shared_name_still_counts_as_self() {
    let dir = UserDirectory::new(vec![
        KnownUser::new("100", "Kim"),
        KnownUser::new("200", "Kim"),
    ]);
    let mut second = FriendRegistry::new("200");
    assert_eq!(second.add_friend(&dir, "Kim"), Err(FriendError::SelfReference));
    assert!(second.is_empty());

    // Someone else can still reach the earliest "Kim".
    let mut third = FriendRegistry::new("300");
    third.add_friend(&dir, "Kim").unwrap();
    assert!(third.contains("100"));
}

#[test]
fn unknown_and_duplicate_are_rejected_unchanged() {
    let dir = directory();
    let mut reg = FriendRegistry::new("1");
    assert_eq!(
        reg.add_friend(&dir, "Nobody"),
        Err(FriendError::NotFound("Nobody".into()))
    );
    // Lookup is case sensitive.
    assert!(matches!(
        reg.add_friend(&dir, "parkbaedal"),
        Err(FriendError::NotFound(_))
    ));

    reg.add_friend(&dir, "  LeePojang ").unwrap();
    let before = reg.clone();
    assert_eq!(
        reg.add_friend(&dir, "LeePojang"),
        Err(FriendError::Duplicate("LeePojang".into()))
    );
    assert_eq!(reg, before);
}

#[test]
fn friends_keep_insertion_order() {
    let dir = directory();
    let mut reg = FriendRegistry::new("1");
    reg.add_friend(&dir, "LeePojang").unwrap();
    reg.add_friend(&dir, "ParkBaedal").unwrap();
    let ids: Vec<&str> = reg.iter().map(|f| f.user_id.as_str()).collect();
    assert_eq!(ids, vec!["resident_3", "resident_2"]);
    assert_eq!(reg.owner_id(), "1");
}
