//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use super::constants::{
    DEFAULT_AUTH_PASSWORD, DEFAULT_AUTH_USERNAME, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_STORAGE_BACKEND,
};

/// Where user records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Relational table through SeaORM
    Sql,
    /// Process-local map, lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql" | "database" | "db" => Ok(StorageBackend::Sql),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sql => write!(f, "sql"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub storage: StorageBackend,
    pub auth_username: String,
    auth_password: String,
    /// Origin allowed to call the API from a browser; any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("storage", &self.storage)
            .field("auth_username", &self.auth_username)
            .field("auth_password", &"[REDACTED]")
            .field("cors_allowed_origin", &self.cors_allowed_origin)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            storage: StorageBackend::Sql,
            auth_username: DEFAULT_AUTH_USERNAME.to_string(),
            auth_password: DEFAULT_AUTH_PASSWORD.to_string(),
            cors_allowed_origin: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics in release builds if AUTH_PASSWORD is not set, so the
    /// development credentials never reach production.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let auth_password = env::var("AUTH_PASSWORD").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("AUTH_PASSWORD not set, using development credentials");
                DEFAULT_AUTH_PASSWORD.to_string()
            } else {
                panic!("AUTH_PASSWORD environment variable must be set in production");
            }
        });

        let storage = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| DEFAULT_STORAGE_BACKEND.to_string())
            .parse()
            .unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to sql", e);
                StorageBackend::Sql
            });

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            storage,
            auth_username: env::var("AUTH_USERNAME")
                .unwrap_or_else(|_| DEFAULT_AUTH_USERNAME.to_string()),
            auth_password,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Plain-text login password; hashed once when the auth service is built.
    pub fn auth_password(&self) -> &str {
        &self.auth_password
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
