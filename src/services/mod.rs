//! Application services layer - Use cases.
//!
//! Services depend on abstractions (traits) so handlers and tests can
//! swap the store or the services themselves.

mod auth_service;
pub mod container;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator, LoginResponse};
pub use user_service::{UserManager, UserService};
