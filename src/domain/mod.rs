//! # Domain Layer
//!
//! The domain layer contains the core business objects of the messaging
//! backend. It is independent of any external frameworks or infrastructure
//! concerns.
//!
//! ## Structure
//!
//! - **entities**: Users, chats and messages, their request models and
//!   repository traits
//! - **services**: Pure logic spanning entities (chat listing order)

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
