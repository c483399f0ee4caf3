//! Message Validator

use async_trait::async_trait;

use crate::domain::{CreateMessage, Message, MessageRepository};
use crate::shared::error::{AppError, ValidationError};
use crate::shared::validation::{is_empty_str, run_pipeline, Step};

/// Validating decorator over a message capability.
pub struct MessageValidator<R> {
    inner: R,
}

impl<R: MessageRepository> MessageValidator<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

fn chat_not_null(chat: &Option<i64>) -> Result<(), ValidationError> {
    match chat {
        None => Err(ValidationError::MessageChatIsNull),
        Some(_) => Ok(()),
    }
}

fn message_chat_not_null(request: &CreateMessage) -> Result<(), ValidationError> {
    chat_not_null(&request.chat)
}

fn author_not_null(request: &CreateMessage) -> Result<(), ValidationError> {
    match request.author {
        None => Err(ValidationError::MessageAuthorIsNull),
        Some(_) => Ok(()),
    }
}

fn text_not_null(request: &CreateMessage) -> Result<(), ValidationError> {
    match request.text {
        None => Err(ValidationError::MessageTextIsNull),
        Some(_) => Ok(()),
    }
}

fn text_not_empty(request: &CreateMessage) -> Result<(), ValidationError> {
    if is_empty_str(&request.text) {
        return Err(ValidationError::MessageTextIsEmpty);
    }
    Ok(())
}

#[async_trait]
impl<R: MessageRepository> MessageRepository for MessageValidator<R> {
    async fn create(&self, mut request: CreateMessage) -> Result<i64, AppError> {
        run_pipeline(
            &mut request,
            &[
                Step::Check(message_chat_not_null),
                Step::Check(author_not_null),
                Step::Check(text_not_null),
                Step::Check(text_not_empty),
            ],
        )
        .inspect_err(|e| tracing::debug!(error = %e, "Message creation rejected"))?;

        self.inner.create(request).await
    }

    async fn by_chat_id(&self, mut chat_id: Option<i64>) -> Result<Vec<Message>, AppError> {
        run_pipeline(&mut chat_id, &[Step::Check(chat_not_null)])
            .inspect_err(|e| tracing::debug!(error = %e, "Message listing rejected"))?;

        self.inner.by_chat_id(chat_id).await
    }
}
