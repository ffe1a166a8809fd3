use crate::models::user::{User, UserRecord};
use crate::registry::{UserRegistry, UserStore};
use crate::server::AppState;
use std::sync::Arc;

/// Create a test AppState backed by a fresh, empty registry
pub fn create_test_state() -> AppState {
    AppState::default()
}

/// Create a test AppState around the given store
pub fn create_test_state_with_store(store: Arc<dyn UserStore>) -> AppState {
    AppState { users: store }
}

/// Create a test AppState whose registry already holds the given users
pub fn create_test_state_with_users(users: &[(&str, &str)]) -> (AppState, Vec<User>) {
    let registry = UserRegistry::new();
    let created = users
        .iter()
        .map(|(name, email)| {
            registry.insert(UserRecord {
                name: name.to_string(),
                email: email.to_string(),
            })
        })
        .collect();

    (AppState::new(registry), created)
}
