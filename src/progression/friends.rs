//! The user directory and per-user friend registries.

use crate::database::models::KnownUser;
use crate::error::FriendError;

/// Every user a nickname can resolve to.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<KnownUser>,
}

impl UserDirectory {
    pub fn new(users: Vec<KnownUser>) -> Self {
        Self { users }
    }

    /// Finds a user by exact nickname. The earliest registration wins on clashes.
    pub fn resolve(&self, nickname: &str) -> Option<&KnownUser> {
        let nickname = nickname.trim();
        self.users.iter().find(|u| u.name == nickname)
    }

    pub fn get(&self, user_id: &str) -> Option<&KnownUser> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    /// Inserts a user or refreshes the name of an existing one.
    pub fn upsert(&mut self, user: KnownUser) {
        match self.users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => existing.name = user.name,
            None => self.users.push(user),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnownUser> {
        self.users.iter()
    }
}

/// Ordered, duplicate-free list of one user's friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRegistry {
    owner_id: String,
    friends: Vec<KnownUser>,
}

impl FriendRegistry {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            friends: Vec::new(),
        }
    }

    pub fn with_friends(owner_id: impl Into<String>, friends: Vec<KnownUser>) -> Self {
        let mut registry = Self::new(owner_id);
        for friend in friends {
            if friend.user_id != registry.owner_id && !registry.contains(&friend.user_id) {
                registry.friends.push(friend);
            }
        }
        registry
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.friends.iter().any(|f| f.user_id == user_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnownUser> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Adds the user called `nickname`, returning a confirmation message.
    ///
    /// Checked in order: the nickname resolves, it is not the owner, it is not
    /// already a friend. Names are not unique, so the owner's own current name
    /// counts as the owner even when someone else registered it first.
    pub fn add_friend(
        &mut self,
        directory: &UserDirectory,
        nickname: &str,
    ) -> Result<String, FriendError> {
        let nickname = nickname.trim();
        let Some(found) = directory.resolve(nickname) else {
            return Err(FriendError::NotFound(nickname.to_string()));
        };
        let owns_name = directory
            .get(&self.owner_id)
            .is_some_and(|me| me.name == nickname);
        if owns_name || found.user_id == self.owner_id {
            return Err(FriendError::SelfReference);
        }
        if self.contains(&found.user_id) {
            return Err(FriendError::Duplicate(found.name.clone()));
        }
        self.friends.push(found.clone());
        Ok(format!("Added {} to your friends.", found.name))
    }
}
