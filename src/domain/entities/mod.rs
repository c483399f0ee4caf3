//! # Domain Entities
//!
//! Core domain entities representing the main business objects of the
//! messaging backend. All entities map directly to their database tables.
//!
//! - **User**: a named account
//! - **Chat**: a named group of member users
//! - **Message**: a text message posted by a member to a chat
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait describing its capability.
//! The same trait is implemented by the infrastructure adapters, by the
//! validators wrapping them and by the services composing both, so callers
//! cannot tell a validated call from a raw one.

mod chat;
mod message;
mod user;

pub use chat::{Chat, ChatDetails, ChatRepository, ChatsByUser, CreateChat};
pub use message::{CreateMessage, Message, MessageRepository, MessagesByChat, NewMessage};
pub use user::{CreateUser, User, UserRepository};

#[cfg(test)]
pub use chat::MockChatRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use user::MockUserRepository;
