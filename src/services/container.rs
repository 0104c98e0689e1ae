//! Service Container - Explicit wiring of services to their store.
//!
//! Every dependency is passed in through a constructor; nothing is
//! resolved from ambient state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{AuthService, Authenticator, UserManager, UserService};
use crate::domain::Credentials;
use crate::infra::{InMemoryUserStore, UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a container from already built services
    pub fn new(auth_service: Arc<dyn AuthService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            auth_service,
            user_service,
        }
    }

    /// Wire the services on top of any user store
    pub fn with_store(store: Arc<dyn UserRepository>, credentials: Credentials) -> Self {
        Self::new(
            Arc::new(Authenticator::new(credentials)),
            Arc::new(UserManager::new(store)),
        )
    }

    /// Services backed by a fresh in-memory store
    pub fn in_memory(credentials: Credentials) -> Self {
        Self::with_store(Arc::new(InMemoryUserStore::new()), credentials)
    }

    /// Services backed by the SeaORM store
    pub fn from_connection(db: DatabaseConnection, credentials: Credentials) -> Self {
        Self::with_store(Arc::new(UserStore::new(db)), credentials)
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
