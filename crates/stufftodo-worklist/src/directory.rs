//! User lookup contract and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use stufftodo_models::{User, UserId};

/// Resolves user identities for the HTTP layer.
pub trait UserDirectory: Send + Sync {
    /// Looks up a user by ID.
    fn find(&self, id: UserId) -> Option<User>;

    /// All known users, ordered by ID. Used to build the user filter group.
    fn all(&self) -> Vec<User>;
}

/// Thread-safe in-memory user directory.
#[derive(Default, Clone)]
pub struct InMemoryUserDirectory {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user, replacing any existing entry with the same ID.
    pub fn insert(&self, user: User) {
        if let Ok(mut users) = self.users.lock() {
            users.insert(user.id, user);
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find(&self, id: UserId) -> Option<User> {
        self.users.lock().ok()?.get(&id).cloned()
    }

    fn all(&self) -> Vec<User> {
        let Ok(users) = self.users.lock() else {
            return Vec::new();
        };
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        all
    }
}
