use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque identifier assigned to a user when it is created
pub type UserId = String;

/// User creation request model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name of the user
    pub name: String,

    /// Contact email of the user
    pub email: String,
}

/// The stored part of a user, keyed by its [`UserId`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

impl From<CreateUserRequest> for UserRecord {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}

/// User model returned by the create and get endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub user_id: UserId,

    /// Display name of the user
    pub name: String,

    /// Contact email of the user
    pub email: String,
}

impl User {
    /// Build a user from its identifier and stored record
    pub fn new(user_id: impl Into<UserId>, record: UserRecord) -> Self {
        Self {
            user_id: user_id.into(),
            name: record.name,
            email: record.email,
        }
    }

    /// The stored part of this user
    pub fn record(&self) -> UserRecord {
        UserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
