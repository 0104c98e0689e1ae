//! The single login pair accepted by the auth endpoint.

use super::Password;
use crate::errors::AppResult;

/// Configured username and hashed password.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: Password,
}

impl Credentials {
    /// Hash `password` and pair it with `username`.
    pub fn new(username: impl Into<String>, password: &str) -> AppResult<Self> {
        Ok(Self {
            username: username.into(),
            password: Password::new(password)?,
        })
    }

    /// Both parts must match. The hash is checked even for an unknown
    /// username so response time does not reveal which part was wrong.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let password_ok = self.password.verify(password);
        username == self.username && password_ok
    }
}
