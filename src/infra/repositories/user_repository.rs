//! User repository backed by a relational table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserDetails};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User store contract, shared by every backend.
///
/// Identifiers are assigned by the store, start at 1, grow strictly and
/// are never reused after a delete. `update` and `delete` report a missing
/// identifier with `Ok(false)` and leave the store unchanged.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its identifier populated
    async fn add(&self, details: UserDetails) -> AppResult<User>;

    /// Find user by ID
    async fn get(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users, ordered by identifier
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Overwrite all mutable fields of an existing user
    async fn update(&self, id: i32, details: UserDetails) -> AppResult<bool>;

    /// Remove a user
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Active model carrying every mutable column, identifier left unset
fn details_model(details: UserDetails) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(details.name),
        email: Set(details.email),
        phone: Set(details.phone),
        employee_number: Set(details.employee_number),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn add(&self, details: UserDetails) -> AppResult<User> {
        let model = details_model(details)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn get(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, details: UserDetails) -> AppResult<bool> {
        // One statement, so a row deleted in between just matches nothing
        let result = UserEntity::update_many()
            .set(details_model(details))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
