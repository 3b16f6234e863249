//! Account domain models.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a registered account.
///
/// Accounts are created once on signup and are never mutated or deleted.
/// Serializes to the persisted `{id, username, password}` shape.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    /// Credential as sealed by the active `CredentialChecker`.
    #[serde(default)]
    pub password: String,
}

impl Account {
    /// Creates an account with a fresh time-ordered id.
    pub fn new(username: impl Into<String>, sealed_password: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            username: username.into(),
            password: sealed_password.into(),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Rejects a signup or login form with an empty username or password.
pub fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "username".to_string(),
        )));
    }
    if password.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "password".to_string(),
        )));
    }
    Ok(())
}
