//! This module defines the in-memory store that stands in for a real database.
//!
//! Each user's state lives in its own [`UserSession`] behind a per-user mutex, so
//! operations on one profile are serialized without a global lock. The store is
//! created at startup and dropped with the process; nothing is persisted.

use crate::config::ProgressionRules;
use crate::constants::STARTER_FRIEND_COUNT;
use crate::database::models::{ActivityLog, KnownUser, Profile};
use crate::progression::friends::{FriendRegistry, UserDirectory};
use crate::progression::ranking::ScoreSource;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Everything the bot keeps about one user.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub profile: Profile,
    pub activities: ActivityLog,
    pub friends: FriendRegistry,
}

impl UserSession {
    pub fn new(user_id: &str, display_name: &str, starter_friends: &[KnownUser]) -> Self {
        Self {
            profile: Profile::new(user_id, display_name),
            activities: ActivityLog::default(),
            friends: FriendRegistry::with_friends(user_id, starter_friends.to_vec()),
        }
    }
}

pub type SessionHandle = Arc<Mutex<UserSession>>;

/// The mock residents every neighbourhood starts with.
pub fn default_residents() -> Vec<KnownUser> {
    [
        ("resident_2", "ParkBaedal"),
        ("resident_3", "LeePojang"),
        ("resident_4", "ChoiWalking"),
        ("resident_5", "KangDallyeo"),
        ("resident_6", "JoJeolyak"),
        ("resident_7", "Neighbour1"),
        ("resident_8", "Neighbour2"),
    ]
    .into_iter()
    .map(|(id, name)| KnownUser::new(id, name))
    .collect()
}

pub struct MemoryStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    directory: RwLock<UserDirectory>,
    residents: Vec<KnownUser>,
    scores: Mutex<Box<dyn ScoreSource>>,
    rules: ProgressionRules,
}

impl MemoryStore {
    pub fn new(scores: Box<dyn ScoreSource>) -> Self {
        Self::with_residents(scores, default_residents())
    }

    pub fn with_residents(scores: Box<dyn ScoreSource>, residents: Vec<KnownUser>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            directory: RwLock::new(UserDirectory::new(residents.clone())),
            residents,
            scores: Mutex::new(scores),
            rules: ProgressionRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: ProgressionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    pub fn residents(&self) -> &[KnownUser] {
        &self.residents
    }

    pub fn is_resident(&self, user_id: &str) -> bool {
        self.residents.iter().any(|r| r.user_id == user_id)
    }

    /// Returns the user's session, creating a fresh one on first contact.
    pub async fn session(&self, user_id: &str, display_name: &str) -> SessionHandle {
        if let Some(handle) = self.sessions.read().await.get(user_id) {
            return handle.clone();
        }

        let mut created = false;
        let handle = {
            let mut sessions = self.sessions.write().await;
            sessions
                .entry(user_id.to_string())
                .or_insert_with(|| {
                    created = true;
                    let starters: Vec<KnownUser> = self
                        .residents
                        .iter()
                        .take(STARTER_FRIEND_COUNT)
                        .cloned()
                        .collect();
                    Arc::new(Mutex::new(UserSession::new(
                        user_id,
                        display_name,
                        &starters,
                    )))
                })
                .clone()
        };

        if created {
            self.directory
                .write()
                .await
                .upsert(KnownUser::new(user_id, display_name));
            debug!(target: "store.session", user_id = %user_id, "created session");
        }
        handle
    }

    pub async fn find_session(&self, user_id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(user_id).cloned()
    }

    /// Snapshot of all session handles, in no particular order.
    pub async fn session_handles(&self) -> Vec<(String, SessionHandle)> {
        self.sessions
            .read()
            .await
            .iter()
            .map(|(id, h)| (id.clone(), h.clone()))
            .collect()
    }

    pub async fn directory_snapshot(&self) -> UserDirectory {
        self.directory.read().await.clone()
    }

    pub(crate) async fn update_directory(&self, user: KnownUser) {
        self.directory.write().await.upsert(user);
    }

    /// Competitor score for a user without a live session.
    pub async fn external_score(&self, user_id: &str) -> u64 {
        self.scores.lock().await.score_for(user_id)
    }
}
