//! Message Service
//!
//! Public capability surface for posting and listing messages.

use async_trait::async_trait;

use crate::application::validators::MessageValidator;
use crate::domain::{CreateMessage, Message, MessageRepository};
use crate::shared::error::AppError;

/// Message service trait. Same operations as [`MessageRepository`].
pub trait MessageService: MessageRepository {}

/// MessageService implementation
pub struct MessageServiceImpl<R> {
    inner: R,
}

impl<R: MessageRepository> MessageServiceImpl<MessageValidator<R>> {
    /// Compose validation over the given adapter.
    pub fn new(repo: R) -> Self {
        Self {
            inner: MessageValidator::new(repo),
        }
    }
}

impl<R: MessageRepository> MessageServiceImpl<R> {
    /// Expose an already composed capability as the service.
    pub fn over(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: MessageRepository> MessageRepository for MessageServiceImpl<R> {
    async fn create(&self, request: CreateMessage) -> Result<i64, AppError> {
        let id = self.inner.create(request).await?;
        tracing::info!(message_id = id, "Message posted");
        Ok(id)
    }

    async fn by_chat_id(&self, chat_id: Option<i64>) -> Result<Vec<Message>, AppError> {
        self.inner.by_chat_id(chat_id).await
    }
}

impl<R: MessageRepository> MessageService for MessageServiceImpl<R> {}
