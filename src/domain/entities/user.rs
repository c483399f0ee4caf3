//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, ValidationError};

/// Represents a user account in the chat system.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned ID (primary key)
    pub id: i64,

    /// Unique display name
    #[serde(rename = "username")]
    pub name: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Body of a user creation request.
///
/// `username` absent or `null` is `None`; `""` is `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    pub username: Option<String>,
}

impl CreateUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// The name to persist. Refuses what validation would have refused.
    pub fn required_name(&self) -> Result<&str, ValidationError> {
        match self.username.as_deref() {
            None => Err(ValidationError::UserNameIsNull),
            Some("") => Err(ValidationError::UserNameIsEmpty),
            Some(name) => Ok(name),
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implemented by the persistence adapters, by the validator wrapping them,
/// and by the service composing both.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user, returning its new id.
    async fn create(&self, request: CreateUser) -> Result<i64, AppError>;
}
