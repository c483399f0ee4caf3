//! Chat Service
//!
//! Public capability surface for chat creation and chat listing.

use async_trait::async_trait;

use crate::application::validators::ChatValidator;
use crate::domain::{ChatDetails, ChatRepository, CreateChat};
use crate::shared::error::AppError;

/// Chat service trait. Same operations as [`ChatRepository`].
pub trait ChatService: ChatRepository {}

/// ChatService implementation
pub struct ChatServiceImpl<R> {
    inner: R,
}

impl<R: ChatRepository> ChatServiceImpl<ChatValidator<R>> {
    /// Compose validation over the given adapter.
    pub fn new(repo: R) -> Self {
        Self {
            inner: ChatValidator::new(repo),
        }
    }
}

impl<R: ChatRepository> ChatServiceImpl<R> {
    /// Expose an already composed capability as the service.
    pub fn over(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: ChatRepository> ChatRepository for ChatServiceImpl<R> {
    async fn create(&self, request: CreateChat) -> Result<i64, AppError> {
        let id = self.inner.create(request).await?;
        tracing::info!(chat_id = id, "Chat created");
        Ok(id)
    }

    async fn by_user_id(&self, user_id: Option<i64>) -> Result<Vec<ChatDetails>, AppError> {
        let chats = self.inner.by_user_id(user_id).await?;
        tracing::debug!(?user_id, count = chats.len(), "Chats listed");
        Ok(chats)
    }
}

impl<R: ChatRepository> ChatService for ChatServiceImpl<R> {}
