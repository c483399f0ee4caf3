//! Chat entity and repository trait.
//!
//! Maps to the `chats` table and the `chats_users` membership join table.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Message, User};
use crate::shared::error::{AppError, ValidationError};
use crate::shared::string_id::StringId;

/// A named group of member users.
///
/// Maps to the `chats` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A chat with its members and its messages, as returned by chat listing.
///
/// Members are ordered by id, messages newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDetails {
    #[serde(flatten)]
    pub chat: Chat,
    pub users: Vec<User>,
    pub messages: Vec<Message>,
}

impl ChatDetails {
    pub fn new(chat: Chat) -> Self {
        Self {
            chat,
            users: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.chat.id
    }
}

/// Body of a chat creation request.
///
/// `users` keeps three states apart: absent/`null` (`None`), `[]`
/// (`Some(vec![])`) and a list holding `null` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateChat {
    pub name: Option<String>,
    pub users: Option<Vec<Option<StringId>>>,
}

impl CreateChat {
    pub fn new(name: impl Into<String>, users: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: Some(name.into()),
            users: Some(users.into_iter().map(|id| Some(StringId(id))).collect()),
        }
    }

    /// The chat name to persist. Refuses what validation would have refused.
    pub fn required_name(&self) -> Result<&str, ValidationError> {
        match self.name.as_deref() {
            None => Err(ValidationError::ChatNameIsNull),
            Some("") => Err(ValidationError::ChatNameIsEmpty),
            Some(name) => Ok(name),
        }
    }

    /// Distinct member ids, ascending.
    pub fn distinct_user_ids(&self) -> Result<Vec<i64>, ValidationError> {
        let users = self.users.as_ref().ok_or(ValidationError::ChatUsersIsNull)?;
        if users.is_empty() {
            return Err(ValidationError::ChatUsersIsEmpty);
        }

        let mut ids = BTreeSet::new();
        for id in users {
            let id = id.ok_or(ValidationError::ChatUsersContainNull)?;
            ids.insert(id.get());
        }
        Ok(ids.into_iter().collect())
    }
}

/// Body of a chat listing request: `{ "user": "<id>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatsByUser {
    pub user: Option<StringId>,
}

impl ChatsByUser {
    pub fn user_id(&self) -> Option<i64> {
        self.user.map(StringId::get)
    }
}

/// Repository trait for Chat data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Create a chat with its members, returning its new id.
    async fn create(&self, request: CreateChat) -> Result<i64, AppError>;

    /// The user's chats, most recent message activity first; chats without
    /// messages come last.
    async fn by_user_id(&self, user_id: Option<i64>) -> Result<Vec<ChatDetails>, AppError>;
}
