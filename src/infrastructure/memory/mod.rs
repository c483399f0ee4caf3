//! In-memory persistence adapter.
//!
//! Implements the three repository traits over process-local tables with the
//! same classification and ordering as the PostgreSQL adapters. Used to run
//! the full service stack without a database.
//!
//! # Example
//!
//! ```ignore
//! let store = InMemoryStore::new();
//! let services = Services::over_store(store.clone());
//!
//! services.user.create(CreateUser::new("alice")).await?;
//! assert_eq!(store.user_count(), 1);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::domain::services::chat_listing::{self, ChatActivity};
use crate::domain::{
    Chat, ChatDetails, ChatRepository, CreateChat, CreateMessage, CreateUser, Message,
    MessageRepository, User, UserRepository,
};
use crate::shared::error::{
    AppError, ConflictError, ForbiddenError, NotFoundError, ValidationError,
};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    chats: BTreeMap<i64, Chat>,
    /// (chat_id, user_id)
    memberships: BTreeSet<(i64, i64)>,
    messages: Vec<Message>,
    last_id: i64,
    last_stamp: Option<DateTime<Utc>>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Wall-clock time, bumped when needed so that stamps strictly increase.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn is_member(&self, chat_id: i64, user_id: i64) -> bool {
        self.memberships.contains(&(chat_id, user_id))
    }
}

/// Shared in-memory tables. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }

    pub fn chat_count(&self) -> usize {
        self.tables.read().chats.len()
    }

    /// Member ids of a chat, ascending.
    pub fn members_of(&self, chat_id: i64) -> Vec<i64> {
        self.tables
            .read()
            .memberships
            .range((chat_id, i64::MIN)..=(chat_id, i64::MAX))
            .map(|&(_, user_id)| user_id)
            .collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, request: CreateUser) -> Result<i64, AppError> {
        let name = request.required_name()?;
        let mut tables = self.tables.write();

        if tables.users.values().any(|u| u.name == name) {
            return Err(ConflictError::UserAlreadyExists.into());
        }

        let id = tables.next_id();
        let created_at = tables.stamp();
        tables.users.insert(
            id,
            User {
                id,
                name: name.to_owned(),
                created_at,
            },
        );
        Ok(id)
    }
}

#[async_trait]
impl ChatRepository for InMemoryStore {
    async fn create(&self, request: CreateChat) -> Result<i64, AppError> {
        let name = request.required_name()?;
        let user_ids = request.distinct_user_ids()?;
        let mut tables = self.tables.write();

        if tables.chats.values().any(|c| c.name == name) {
            return Err(ConflictError::ChatAlreadyExists.into());
        }
        if !user_ids.iter().all(|id| tables.users.contains_key(id)) {
            return Err(ConflictError::SomeUsersDontExist.into());
        }

        let id = tables.next_id();
        let created_at = tables.stamp();
        tables.chats.insert(
            id,
            Chat {
                id,
                name: name.to_owned(),
                created_at,
            },
        );
        tables
            .memberships
            .extend(user_ids.into_iter().map(|user_id| (id, user_id)));
        Ok(id)
    }

    async fn by_user_id(&self, user_id: Option<i64>) -> Result<Vec<ChatDetails>, AppError> {
        let user_id = user_id.ok_or(ValidationError::ChatUserIsNull)?;
        let tables = self.tables.read();

        if !tables.users.contains_key(&user_id) {
            return Err(NotFoundError::UserDoesntExist.into());
        }

        let chat_ids: BTreeSet<i64> = tables
            .memberships
            .iter()
            .filter(|&&(_, member)| member == user_id)
            .map(|&(chat_id, _)| chat_id)
            .collect();

        let activity = chat_ids
            .iter()
            .map(|&chat_id| {
                let last = tables
                    .messages
                    .iter()
                    .filter(|m| m.chat_id == chat_id)
                    .map(|m| m.created_at)
                    .max();
                ChatActivity::new(chat_id, last)
            })
            .collect();
        let ranked = chat_listing::rank(activity);

        let chats = chat_ids
            .iter()
            .filter_map(|id| tables.chats.get(id).cloned())
            .collect();
        let members = tables
            .memberships
            .iter()
            .filter(|(chat_id, _)| chat_ids.contains(chat_id))
            .filter_map(|&(chat_id, member)| {
                tables.users.get(&member).map(|u| (chat_id, u.clone()))
            })
            .collect();
        let messages = tables
            .messages
            .iter()
            .filter(|m| chat_ids.contains(&m.chat_id))
            .cloned()
            .collect();

        Ok(chat_listing::assemble(&ranked, chats, members, messages))
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn create(&self, request: CreateMessage) -> Result<i64, AppError> {
        let message = request.required()?;
        let mut tables = self.tables.write();

        if !tables.chats.contains_key(&message.chat_id) {
            return Err(NotFoundError::ChatDoesntExist.into());
        }
        if !tables.users.contains_key(&message.author_id) {
            return Err(NotFoundError::UserDoesntExist.into());
        }
        if !tables.is_member(message.chat_id, message.author_id) {
            return Err(ForbiddenError::UserIsNotInChat.into());
        }

        let id = tables.next_id();
        let created_at = tables.stamp();
        tables.messages.push(Message {
            id,
            chat_id: message.chat_id,
            author_id: message.author_id,
            text: message.text.to_owned(),
            created_at,
        });
        Ok(id)
    }

    async fn by_chat_id(&self, chat_id: Option<i64>) -> Result<Vec<Message>, AppError> {
        let chat_id = chat_id.ok_or(ValidationError::MessageChatIsNull)?;
        let tables = self.tables.read();

        if !tables.chats.contains_key(&chat_id) {
            return Err(NotFoundError::ChatDoesntExist.into());
        }

        let mut messages: Vec<Message> = tables
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect();
        chat_listing::sort_oldest_first(&mut messages);
        Ok(messages)
    }
}
