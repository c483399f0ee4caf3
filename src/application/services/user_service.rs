//! User Service
//!
//! Public capability surface for user operations.

use async_trait::async_trait;

use crate::application::validators::UserValidator;
use crate::domain::{CreateUser, UserRepository};
use crate::shared::error::AppError;

/// User service trait. Same operations as [`UserRepository`]; callers
/// depend on this name, never on the validator or the adapter.
pub trait UserService: UserRepository {}

/// UserService implementation
pub struct UserServiceImpl<R> {
    inner: R,
}

impl<R: UserRepository> UserServiceImpl<UserValidator<R>> {
    /// Compose validation over the given adapter.
    pub fn new(repo: R) -> Self {
        Self {
            inner: UserValidator::new(repo),
        }
    }
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Expose an already composed capability as the service.
    pub fn over(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: UserRepository> UserRepository for UserServiceImpl<R> {
    async fn create(&self, request: CreateUser) -> Result<i64, AppError> {
        let id = self.inner.create(request).await?;
        tracing::info!(user_id = id, "User created");
        Ok(id)
    }
}

impl<R: UserRepository> UserService for UserServiceImpl<R> {}
