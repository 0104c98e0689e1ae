//! User Management API
//!
//! REST backend exposing CRUD operations on users and a login check,
//! built with Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and value objects
//! - **services**: Application use cases
//! - **infra**: Database, migrations and user stores
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server backed by SQLite
//! cargo run -- serve
//!
//! # Start the server with an in-memory store
//! cargo run -- serve --storage memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credentials, User, UserDetails};
pub use errors::{AppError, AppResult};
