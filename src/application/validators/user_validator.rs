//! User Validator
//!
//! Field checks for user creation, in front of any `UserRepository`.

use async_trait::async_trait;

use crate::domain::{CreateUser, UserRepository};
use crate::shared::error::{AppError, ValidationError};
use crate::shared::validation::{is_empty_str, run_pipeline, Step};

/// Validating decorator over a user capability.
pub struct UserValidator<R> {
    inner: R,
}

impl<R: UserRepository> UserValidator<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

fn name_not_null(request: &CreateUser) -> Result<(), ValidationError> {
    match request.username {
        None => Err(ValidationError::UserNameIsNull),
        Some(_) => Ok(()),
    }
}

fn name_not_empty(request: &CreateUser) -> Result<(), ValidationError> {
    if is_empty_str(&request.username) {
        return Err(ValidationError::UserNameIsEmpty);
    }
    Ok(())
}

#[async_trait]
impl<R: UserRepository> UserRepository for UserValidator<R> {
    async fn create(&self, mut request: CreateUser) -> Result<i64, AppError> {
        run_pipeline(
            &mut request,
            &[Step::Check(name_not_null), Step::Check(name_not_empty)],
        )
        .inspect_err(|e| tracing::debug!(error = %e, "User creation rejected"))?;

        self.inner.create(request).await
    }
}
