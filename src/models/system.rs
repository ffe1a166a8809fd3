use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status reported by the health endpoint while the service is up
pub const SERVICE_STATUS: &str = "user-service ok";

/// Health check response model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Fixed liveness status
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: SERVICE_STATUS.to_string(),
        }
    }
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable reason
    pub error: String,
}
