//! Application state shared by all handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, ServiceContainer, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection, absent when users are kept in memory
    pub database: Option<Arc<Database>>,
    /// Browser origin allowed by CORS; any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(auth_service: Arc<dyn AuthService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            auth_service,
            user_service,
            database: None,
            cors_allowed_origin: None,
        }
    }

    /// Create application state from a service container.
    pub fn from_services(services: &impl ServiceContainer) -> Self {
        Self::new(services.auth(), services.users())
    }

    /// Attach the database used for health checks.
    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }

    /// Restrict CORS to a single origin.
    pub fn with_cors_origin(mut self, origin: Option<String>) -> Self {
        self.cors_allowed_origin = origin;
        self
    }
}
