//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::services::LoginResponse;

/// User login request
///
/// Both keys must be present; empty values are left to the credential
/// check and rejected with 401 like any other wrong pair.
// `Validate` only satisfies the `ValidatedJson` bound; there are no field rules.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "1234")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Check the login pair
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body or missing field"),
        (status = 401, description = "Invalid credentials", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    match state
        .auth_service
        .login(payload.username, payload.password)
        .await
    {
        Ok(()) => Ok((StatusCode::OK, Json(LoginResponse::success()))),
        Err(AppError::InvalidCredentials) => {
            Ok((StatusCode::UNAUTHORIZED, Json(LoginResponse::failure())))
        }
        Err(e) => Err(e),
    }
}
