use crate::models::user::{User, UserId, UserRecord};
use crate::registry::UserStore;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// In-memory user registry
///
/// Records live only as long as the registry; nothing is persisted. Entries
/// are never updated or removed once inserted.
#[derive(Clone, Debug, Default)]
pub struct UserRegistry {
    /// Maps user IDs to stored records
    users: Arc<DashMap<UserId, UserRecord>>,
}

impl UserRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under a new random id
    pub fn insert(&self, record: UserRecord) -> User {
        loop {
            match self.users.entry(Uuid::new_v4().to_string()) {
                Entry::Vacant(entry) => {
                    let user = User::new(entry.key().clone(), record.clone());
                    entry.insert(record);
                    return user;
                }
                Entry::Occupied(entry) => {
                    warn!(user_id = %entry.key(), "Generated user id already taken, retrying");
                }
            }
        }
    }

    /// Get a user by ID
    pub fn get(&self, user_id: &str) -> Option<User> {
        self.users
            .get(user_id)
            .map(|record| User::new(user_id, record.value().clone()))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for UserRegistry {
    async fn create_user(&self, record: UserRecord) -> User {
        self.insert(record)
    }

    async fn get_user(&self, user_id: &str) -> Option<User> {
        self.get(user_id)
    }

    async fn user_count(&self) -> usize {
        self.len()
    }
}
