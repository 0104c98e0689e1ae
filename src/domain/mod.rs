//! Domain layer - Core business entities
//!
//! Models that represent business concepts independent of
//! infrastructure concerns.

pub mod credentials;
pub mod password;
pub mod user;

pub use credentials::Credentials;
pub use password::Password;
pub use user::{User, UserDetails, UserRequest, UserResponse};
