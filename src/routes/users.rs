use crate::handlers::users::{create_user, get_user};
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create the users routes with state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{user_id}", get(get_user))
}
