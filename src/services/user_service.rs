//! User service - Handles user-related use cases.
//!
//! Pass-through to the injected store: same operations, same contracts.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserDetails};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn get_all(&self) -> AppResult<Vec<User>>;

    /// Get user by ID, `None` when absent
    async fn get_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Create a user; the store assigns the identifier
    async fn add(&self, details: UserDetails) -> AppResult<User>;

    /// Overwrite a user's details, `false` when absent
    async fn update(&self, id: i32, details: UserDetails) -> AppResult<bool>;

    /// Delete a user, `false` when absent
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of UserService over any UserRepository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with the given store
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_all(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.users.get(id).await
    }

    async fn add(&self, details: UserDetails) -> AppResult<User> {
        let user = self.users.add(details).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update(&self, id: i32, details: UserDetails) -> AppResult<bool> {
        let updated = self.users.update(id, details).await?;
        if updated {
            tracing::info!(user_id = id, "User updated");
        } else {
            tracing::debug!(user_id = id, "Update skipped, user not found");
        }
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let deleted = self.users.delete(id).await?;
        if deleted {
            tracing::info!(user_id = id, "User deleted");
        } else {
            tracing::debug!(user_id = id, "Delete skipped, user not found");
        }
        Ok(deleted)
    }
}
