//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on creation, never changed afterwards
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employee_number: Option<String>,
}

/// Mutable user fields, used for both creation and full replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employee_number: Option<String>,
}

impl UserDetails {
    /// Details with only the required fields set
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            employee_number: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_employee_number(mut self, employee_number: impl Into<String>) -> Self {
        self.employee_number = Some(employee_number.into());
        self
    }
}

impl User {
    /// Build a user from its identifier and details
    pub fn from_details(id: i32, details: UserDetails) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
            phone: details.phone,
            employee_number: details.employee_number,
        }
    }

    /// Overwrite every mutable field; the identifier is kept.
    pub fn apply(&mut self, details: UserDetails) {
        self.name = details.name;
        self.email = details.email;
        self.phone = details.phone;
        self.employee_number = details.employee_number;
    }
}

/// User create/update request body.
///
/// Carries no content validation: missing `name` or `email` is rejected by
/// deserialization, anything else is stored as given.
// `Validate` only satisfies the `ValidatedJson` bound; there are no field rules.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Ignored on input; the identifier always comes from the store or the path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,
    #[serde(default)]
    #[schema(example = "E-1001")]
    pub employee_number: Option<String>,
}

impl From<UserRequest> for UserDetails {
    fn from(req: UserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            employee_number: req.employee_number,
        }
    }
}

/// User response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub employee_number: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            employee_number: user.employee_number,
        }
    }
}
