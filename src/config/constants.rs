//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication
// =============================================================================

/// Development login username (override with AUTH_USERNAME)
pub const DEFAULT_AUTH_USERNAME: &str = "admin";

/// Development login password (override with AUTH_PASSWORD)
pub const DEFAULT_AUTH_PASSWORD: &str = "1234";

/// Message returned on successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Message returned on failed login
pub const LOGIN_FAILURE_MESSAGE: &str = "Invalid credentials";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Prefix of every resource route
pub const API_PREFIX: &str = "/api";

/// Path of the user collection
pub const USERS_PATH: &str = "/api/users";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// Default storage backend
pub const DEFAULT_STORAGE_BACKEND: &str = "sql";
