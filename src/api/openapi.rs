//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, user_handler};
use crate::domain::{UserRequest, UserResponse};
use crate::services::LoginResponse;

/// OpenAPI documentation for the User Management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "CRUD operations on users and a login check",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserRequest,
            UserResponse,
            auth_handler::LoginRequest,
            LoginResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Login check"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
