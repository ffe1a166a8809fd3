//! Error handling for user-service
//!
//! Every error is rendered as `{"error": "<message>"}` with a matching status.

use crate::models::{ErrorResponse, UserId};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested user id is not in the registry
    #[error("User not found")]
    UserNotFound { user_id: UserId },

    /// Request body or path rejected before reaching the registry
    #[error("{message}")]
    MalformedRequest { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        &self.status() == status_code
    }
}

impl AppError {
    /// Status code this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedRequest { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (self.status(), body).into_response()
    }
}
