use crate::handlers::{system, users};
use crate::models::{CreateUserRequest, ErrorResponse, HealthResponse, User};

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(system::health_check, users::create_user, users::get_user),
    components(schemas(CreateUserRequest, User, HealthResponse, ErrorResponse)),
    tags(
        (name = "system", description = "Service liveness"),
        (name = "users", description = "User registration")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    )
)]
pub struct ApiDoc;
