//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - User creation
//! - **PgChatRepository** - Chat creation and per-user chat listing
//! - **PgMessageRepository** - Posting and listing messages
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use chat_backend::infrastructure::repositories::{
//!     PgChatRepository, PgMessageRepository, PgUserRepository,
//! };
//!
//! fn setup_repositories(pool: PgPool) {
//!     let users = PgUserRepository::new(pool.clone());
//!     let chats = PgChatRepository::new(pool.clone());
//!     let messages = PgMessageRepository::new(pool);
//! }
//! ```

pub mod chat_repository;
pub mod message_repository;
pub mod user_repository;

use sqlx::PgConnection;

use crate::shared::error::AppError;

pub use chat_repository::PgChatRepository;
pub use message_repository::PgMessageRepository;
pub use user_repository::PgUserRepository;

/// Map a unique-constraint violation to `conflict`, anything else to a database error.
pub(crate) fn on_unique_violation(err: sqlx::Error, conflict: impl Into<AppError>) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => conflict.into(),
        _ => AppError::Database(err),
    }
}

/// Map a foreign-key violation to `missing`, anything else to a database error.
pub(crate) fn on_foreign_key_violation(err: sqlx::Error, missing: impl Into<AppError>) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => missing.into(),
        _ => AppError::Database(err),
    }
}

pub(crate) async fn user_exists(conn: &mut PgConnection, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(id)
        .fetch_one(conn)
        .await
}
