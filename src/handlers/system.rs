use crate::models::system::HealthResponse;
use axum::response::Json;

/// Health check
///
/// Reports that the service is up. Always succeeds.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
