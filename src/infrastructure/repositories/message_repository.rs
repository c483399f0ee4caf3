//! Message Repository Implementation
//!
//! PostgreSQL implementation of posting and listing chat messages.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use super::chat_repository::MessageRow;
use super::on_foreign_key_violation;
use crate::domain::{CreateMessage, Message, MessageRepository};
use crate::infrastructure::metrics;
use crate::shared::error::{AppError, ForbiddenError, NotFoundError, ValidationError};

/// PostgreSQL message repository implementation.
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Creates a new PgMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    /// Post a message after checking chat, author and membership.
    ///
    /// Chat and author rows are share-locked for the rest of the transaction
    /// so neither can be deleted between the checks and the insert.
    async fn create(&self, request: CreateMessage) -> Result<i64, AppError> {
        let message = request.required()?;
        let started = Instant::now();

        let mut tx = self.pool.begin().await?;

        let chat = sqlx::query_scalar::<_, i64>("SELECT id FROM chats WHERE id = $1 FOR SHARE")
            .bind(message.chat_id)
            .fetch_optional(&mut *tx)
            .await?;
        if chat.is_none() {
            return Err(NotFoundError::ChatDoesntExist.into());
        }

        let author = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = $1 FOR SHARE")
            .bind(message.author_id)
            .fetch_optional(&mut *tx)
            .await?;
        if author.is_none() {
            return Err(NotFoundError::UserDoesntExist.into());
        }

        let is_member = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM chats_users WHERE chat_id = $1 AND user_id = $2)",
        )
        .bind(message.chat_id)
        .bind(message.author_id)
        .fetch_one(&mut *tx)
        .await?;
        if !is_member {
            return Err(ForbiddenError::UserIsNotInChat.into());
        }

        // clock_timestamp() rather than NOW(): the time of the write, not of BEGIN
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO messages (chat_id, user_id, text, created_at)
            VALUES ($1, $2, $3, clock_timestamp())
            RETURNING id
            "#,
        )
        .bind(message.chat_id)
        .bind(message.author_id)
        .bind(message.text)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            let missing = missing_reference(&e);
            on_foreign_key_violation(e, missing)
        })?;

        tx.commit().await?;

        metrics::record_db_query("create", "messages", started.elapsed().as_secs_f64());
        Ok(id)
    }

    /// All messages of a chat, oldest first.
    async fn by_chat_id(&self, chat_id: Option<i64>) -> Result<Vec<Message>, AppError> {
        let chat_id = chat_id.ok_or(ValidationError::MessageChatIsNull)?;
        let started = Instant::now();

        let mut conn = self.pool.acquire().await?;

        let chat_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM chats WHERE id = $1)")
                .bind(chat_id)
                .fetch_one(&mut *conn)
                .await?;
        if !chat_exists {
            return Err(NotFoundError::ChatDoesntExist.into());
        }

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, chat_id, user_id, text, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(chat_id)
        .fetch_all(&mut *conn)
        .await?;

        metrics::record_db_query("by_chat_id", "messages", started.elapsed().as_secs_f64());
        Ok(rows.into_iter().map(MessageRow::into_message).collect())
    }
}

/// Author foreign key on `messages`, named in the migration.
const AUTHOR_FKEY: &str = "messages_user_id_fkey";

/// Which referenced row a foreign-key violation on `messages` points at.
/// Anything other than the author key is read as the chat.
fn missing_reference(err: &sqlx::Error) -> NotFoundError {
    let constraint = match err {
        sqlx::Error::Database(db) => db.constraint(),
        _ => None,
    };
    missing_for_constraint(constraint)
}

fn missing_for_constraint(constraint: Option<&str>) -> NotFoundError {
    match constraint {
        Some(AUTHOR_FKEY) => NotFoundError::UserDoesntExist,
        _ => NotFoundError::ChatDoesntExist,
    }
}
