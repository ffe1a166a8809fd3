use crate::models::user::{User, UserRecord};
use async_trait::async_trait;

/// Storage backend the HTTP handlers talk to
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a record under a freshly generated id and return the full user
    async fn create_user(&self, record: UserRecord) -> User;

    /// Look up a user by id
    async fn get_user(&self, user_id: &str) -> Option<User>;

    /// Number of users stored
    async fn user_count(&self) -> usize;
}
