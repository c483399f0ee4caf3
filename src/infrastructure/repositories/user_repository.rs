//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::on_unique_violation;
use crate::domain::{CreateUser, User, UserRepository};
use crate::infrastructure::metrics;
use crate::shared::error::{AppError, ConflictError};

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Insert a user. The unique constraint on `name` is the conflict signal.
    async fn create(&self, request: CreateUser) -> Result<i64, AppError> {
        let name = request.required_name()?;
        let started = Instant::now();

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| on_unique_violation(e, ConflictError::UserAlreadyExists))?;

        metrics::record_db_query("create", "users", started.elapsed().as_secs_f64());
        Ok(id)
    }
}
