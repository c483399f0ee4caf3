//! Application Services
//!
//! The public capability surface of the backend.
//!
//! ## Available Services
//!
//! - **UserService**: User creation
//! - **ChatService**: Chat creation and per-user chat listing
//! - **MessageService**: Posting and listing messages
//!
//! Each `*ServiceImpl::new(adapter)` composes the entity's validator over a
//! persistence adapter; `*ServiceImpl::over(..)` exposes any other
//! composition of the same capability.

pub mod chat_service;
pub mod message_service;
pub mod user_service;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{ChatRepository, MessageRepository, UserRepository};
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::repositories::{
    PgChatRepository, PgMessageRepository, PgUserRepository,
};

pub use chat_service::{ChatService, ChatServiceImpl};
pub use message_service::{MessageService, MessageServiceImpl};
pub use user_service::{UserService, UserServiceImpl};

/// The three services, as handed to the HTTP layer.
#[derive(Clone)]
pub struct Services {
    pub user: Arc<dyn UserService>,
    pub chat: Arc<dyn ChatService>,
    pub message: Arc<dyn MessageService>,
}

impl Services {
    /// Compose validated services over the given adapters.
    pub fn new<U, C, M>(users: U, chats: C, messages: M) -> Self
    where
        U: UserRepository + 'static,
        C: ChatRepository + 'static,
        M: MessageRepository + 'static,
    {
        Self {
            user: Arc::new(UserServiceImpl::new(users)),
            chat: Arc::new(ChatServiceImpl::new(chats)),
            message: Arc::new(MessageServiceImpl::new(messages)),
        }
    }

    /// Services backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            PgUserRepository::new(pool.clone()),
            PgChatRepository::new(pool.clone()),
            PgMessageRepository::new(pool),
        )
    }

    /// Services backed by one shared in-memory store.
    pub fn in_memory() -> Self {
        Self::over_store(InMemoryStore::new())
    }

    /// Services backed by the given in-memory store.
    pub fn over_store(store: InMemoryStore) -> Self {
        Self::new(store.clone(), store.clone(), store)
    }
}
