//! Chat Repository Implementation
//!
//! PostgreSQL implementation of chat creation and the per-user chat listing.
//!
//! Listing runs one ranking query and then three bulk queries keyed by the
//! ranked id set (chats, members, messages). The bulk results carry no
//! order of their own and are re-sorted by rank in memory.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::user_repository::UserRow;
use super::{on_foreign_key_violation, on_unique_violation, user_exists};
use crate::domain::services::chat_listing;
use crate::domain::{Chat, ChatDetails, ChatRepository, CreateChat, Message, User};
use crate::infrastructure::metrics;
use crate::shared::error::{AppError, ConflictError, NotFoundError, ValidationError};

/// Chats of a user, most recent message first, chats without messages last.
const RANK_CHATS_SQL: &str = r#"
    SELECT c.id
    FROM chats c
    JOIN chats_users cu ON cu.chat_id = c.id
    LEFT JOIN messages m ON m.chat_id = c.id
    WHERE cu.user_id = $1
    GROUP BY c.id
    ORDER BY MAX(m.created_at) DESC NULLS LAST, c.id ASC
"#;

#[derive(Debug, sqlx::FromRow)]
struct ChatRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl ChatRow {
    fn into_chat(self) -> Chat {
        Chat {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

/// A member together with the chat it was fetched for.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    chat_id: i64,
    #[sqlx(flatten)]
    user: UserRow,
}

impl MemberRow {
    fn into_pair(self) -> (i64, User) {
        (self.chat_id, self.user.into_user())
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct MessageRow {
    pub id: i64,
    pub chat_id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl MessageRow {
    pub fn into_message(self) -> Message {
        Message {
            id: self.id,
            chat_id: self.chat_id,
            author_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL chat repository implementation.
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    /// Create a chat and its membership links in one transaction.
    ///
    /// The name pre-check gives the common case a cheap answer; the unique
    /// constraint at insert time stays authoritative under concurrency.
    async fn create(&self, request: CreateChat) -> Result<i64, AppError> {
        let name = request.required_name()?;
        let user_ids = request.distinct_user_ids()?;
        let started = Instant::now();

        let mut tx = self.pool.begin().await?;

        let name_taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM chats WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        if name_taken {
            return Err(ConflictError::ChatAlreadyExists.into());
        }

        // Locks the members so they can't vanish before the links are written
        let resolved = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM users WHERE id = ANY($1) FOR SHARE",
        )
        .bind(&user_ids)
        .fetch_all(&mut *tx)
        .await?;

        if resolved.len() != user_ids.len() {
            tracing::debug!(
                requested = user_ids.len(),
                resolved = resolved.len(),
                "Chat members don't all exist"
            );
            return Err(ConflictError::SomeUsersDontExist.into());
        }

        let chat_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO chats (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| on_unique_violation(e, ConflictError::ChatAlreadyExists))?;

        sqlx::query(
            r#"
            INSERT INTO chats_users (chat_id, user_id)
            SELECT $1, UNNEST($2::BIGINT[])
            "#,
        )
        .bind(chat_id)
        .bind(&user_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| on_foreign_key_violation(e, ConflictError::SomeUsersDontExist))?;

        tx.commit().await?;

        metrics::record_db_query("create", "chats", started.elapsed().as_secs_f64());
        Ok(chat_id)
    }

    /// List the user's chats from a single snapshot.
    async fn by_user_id(&self, user_id: Option<i64>) -> Result<Vec<ChatDetails>, AppError> {
        let user_id = user_id.ok_or(ValidationError::ChatUserIsNull)?;
        let started = Instant::now();

        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        if !user_exists(&mut *tx, user_id).await? {
            return Err(NotFoundError::UserDoesntExist.into());
        }

        let ranked = sqlx::query_scalar::<_, i64>(RANK_CHATS_SQL)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;

        if ranked.is_empty() {
            tx.commit().await?;
            return Ok(Vec::new());
        }

        let chats = sqlx::query_as::<_, ChatRow>(
            "SELECT id, name, created_at FROM chats WHERE id = ANY($1)",
        )
        .bind(&ranked)
        .fetch_all(&mut *tx)
        .await?;

        let members = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT cu.chat_id, u.id, u.name, u.created_at
            FROM chats_users cu
            JOIN users u ON u.id = cu.user_id
            WHERE cu.chat_id = ANY($1)
            ORDER BY u.id
            "#,
        )
        .bind(&ranked)
        .fetch_all(&mut *tx)
        .await?;

        let messages = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, chat_id, user_id, text, created_at
            FROM messages
            WHERE chat_id = ANY($1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(&ranked)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let details = chat_listing::assemble(
            &ranked,
            chats.into_iter().map(ChatRow::into_chat).collect(),
            members.into_iter().map(MemberRow::into_pair).collect(),
            messages.into_iter().map(MessageRow::into_message).collect(),
        );

        metrics::record_db_query("by_user_id", "chats", started.elapsed().as_secs_f64());
        Ok(details)
    }
}
