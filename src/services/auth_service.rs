//! Authentication service - Checks the configured login pair.
//!
//! No session or token is issued; a successful check is the whole result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{LOGIN_FAILURE_MESSAGE, LOGIN_SUCCESS_MESSAGE};
use crate::domain::Credentials;
use crate::errors::{AppError, AppResult};

/// Login outcome returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Login successful")]
    pub message: String,
}

impl LoginResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            message: LOGIN_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// `Ok(())` when the pair matches, `AppError::InvalidCredentials` otherwise
    async fn login(&self, username: String, password: String) -> AppResult<()>;
}

/// Concrete implementation of AuthService over a fixed credential pair.
pub struct Authenticator {
    credentials: Credentials,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: String, password: String) -> AppResult<()> {
        let credentials = self.credentials.clone();
        let candidate = username.clone();

        // Argon2 verification is CPU bound
        let matches =
            tokio::task::spawn_blocking(move || credentials.matches(&candidate, &password))
                .await
                .map_err(|e| AppError::internal(format!("Credential check failed: {}", e)))?;

        if !matches {
            tracing::warn!(%username, "Login rejected");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(%username, "Login accepted");
        Ok(())
    }
}
