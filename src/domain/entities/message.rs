//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, ValidationError};

/// Represents a message in a chat.
///
/// Maps to the `messages` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - chat_id: BIGINT NOT NULL REFERENCES chats(id) ON DELETE CASCADE
/// - user_id: BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// - text: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned ID (primary key)
    pub id: i64,

    /// Chat the message was posted to
    #[serde(rename = "chat")]
    pub chat_id: i64,

    /// Author user ID
    #[serde(rename = "author")]
    pub author_id: i64,

    /// Message body, never empty
    pub text: String,

    /// Assigned by the store at write time
    pub created_at: DateTime<Utc>,
}

/// Body of a message creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMessage {
    pub chat: Option<i64>,
    pub author: Option<i64>,
    pub text: Option<String>,
}

/// Validated parts of a [`CreateMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMessage<'a> {
    pub chat_id: i64,
    pub author_id: i64,
    pub text: &'a str,
}

impl CreateMessage {
    pub fn new(chat: i64, author: i64, text: impl Into<String>) -> Self {
        Self {
            chat: Some(chat),
            author: Some(author),
            text: Some(text.into()),
        }
    }

    /// The fields to persist. Refuses what validation would have refused.
    pub fn required(&self) -> Result<NewMessage<'_>, ValidationError> {
        let chat_id = self.chat.ok_or(ValidationError::MessageChatIsNull)?;
        let author_id = self.author.ok_or(ValidationError::MessageAuthorIsNull)?;
        let text = match self.text.as_deref() {
            None => return Err(ValidationError::MessageTextIsNull),
            Some("") => return Err(ValidationError::MessageTextIsEmpty),
            Some(text) => text,
        };

        Ok(NewMessage {
            chat_id,
            author_id,
            text,
        })
    }
}

/// Body of a message listing request: `{ "chat": <id> }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagesByChat {
    pub chat: Option<i64>,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Post a message, returning its new id.
    async fn create(&self, request: CreateMessage) -> Result<i64, AppError>;

    /// All messages of a chat, oldest first.
    async fn by_chat_id(&self, chat_id: Option<i64>) -> Result<Vec<Message>, AppError>;
}
