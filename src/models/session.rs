//! Session and login credential models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::validation::{validate_email, validate_password};

/// An authenticated console session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the remote API (or the fallback token)
    pub token: String,
    pub email: String,
}

/// Login form input.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
