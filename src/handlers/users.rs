use crate::error::AppError;
use crate::extractor::{AppJson, AppPath};
use crate::models::{CreateUserRequest, ErrorResponse, User};
use crate::server::AppState;
use axum::{extract::State, response::Json};
use tracing::{debug, info};

/// Create user
///
/// Stores the user under a newly generated id. Name and email are taken as
/// given; no format or uniqueness checks are made.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 415, description = "Request body is not declared as JSON", body = ErrorResponse),
        (status = 422, description = "Missing field or wrong field type", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppJson<User> {
    let user = state.users.create_user(payload.into()).await;
    info!(user_id = %user.user_id, "User created");

    AppJson(user)
}

/// Get user
///
/// Returns the stored user, or 404 when the id was never issued.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 400, description = "User identifier is not valid UTF-8", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    params(
        ("user_id" = String, Path, description = "User identifier")
    )
)]
#[tracing::instrument(skip_all, fields(user_id = %user_id))]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<String>,
) -> Result<Json<User>, AppError> {
    match state.users.get_user(&user_id).await {
        Some(user) => {
            debug!("User found");
            Ok(Json(user))
        }
        None => {
            debug!("User not found");
            Err(AppError::UserNotFound { user_id })
        }
    }
}
