//! Chat Validator
//!
//! Field checks for chat creation and chat listing. Creation ends with the
//! one normalization step of the pipeline: collapsing duplicate member ids.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::{ChatDetails, ChatRepository, CreateChat};
use crate::shared::error::{AppError, ValidationError};
use crate::shared::string_id::StringId;
use crate::shared::validation::{is_empty_str, run_pipeline, Step};

/// Validating decorator over a chat capability.
pub struct ChatValidator<R> {
    inner: R,
}

impl<R: ChatRepository> ChatValidator<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

fn name_not_null(request: &CreateChat) -> Result<(), ValidationError> {
    match request.name {
        None => Err(ValidationError::ChatNameIsNull),
        Some(_) => Ok(()),
    }
}

fn users_not_null(request: &CreateChat) -> Result<(), ValidationError> {
    match request.users {
        None => Err(ValidationError::ChatUsersIsNull),
        Some(_) => Ok(()),
    }
}

fn name_not_empty(request: &CreateChat) -> Result<(), ValidationError> {
    if is_empty_str(&request.name) {
        return Err(ValidationError::ChatNameIsEmpty);
    }
    Ok(())
}

fn users_not_empty(request: &CreateChat) -> Result<(), ValidationError> {
    match &request.users {
        Some(users) if users.is_empty() => Err(ValidationError::ChatUsersIsEmpty),
        _ => Ok(()),
    }
}

fn user_ids_not_null(request: &CreateChat) -> Result<(), ValidationError> {
    let has_null = request
        .users
        .iter()
        .flatten()
        .any(|id| id.is_none());

    if has_null {
        return Err(ValidationError::ChatUsersContainNull);
    }
    Ok(())
}

// Rebuilt from a set: the order of the remaining ids is not preserved.
fn remove_duplicate_users(request: &mut CreateChat) {
    if let Some(users) = request.users.take() {
        let distinct: BTreeSet<StringId> = users.into_iter().flatten().collect();
        request.users = Some(distinct.into_iter().map(Some).collect());
    }
}

fn user_not_null(user_id: &Option<i64>) -> Result<(), ValidationError> {
    match user_id {
        None => Err(ValidationError::ChatUserIsNull),
        Some(_) => Ok(()),
    }
}

#[async_trait]
impl<R: ChatRepository> ChatRepository for ChatValidator<R> {
    async fn create(&self, mut request: CreateChat) -> Result<i64, AppError> {
        run_pipeline(
            &mut request,
            &[
                Step::Check(name_not_null),
                Step::Check(users_not_null),
                Step::Check(name_not_empty),
                Step::Check(users_not_empty),
                Step::Check(user_ids_not_null),
                Step::Normalize(remove_duplicate_users),
            ],
        )
        .inspect_err(|e| tracing::debug!(error = %e, "Chat creation rejected"))?;

        self.inner.create(request).await
    }

    async fn by_user_id(&self, mut user_id: Option<i64>) -> Result<Vec<ChatDetails>, AppError> {
        run_pipeline(&mut user_id, &[Step::Check(user_not_null)])
            .inspect_err(|e| tracing::debug!(error = %e, "Chat listing rejected"))?;

        self.inner.by_user_id(user_id).await
    }
}
