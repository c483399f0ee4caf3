//! Domain Services
//!
//! Pure domain logic that spans several entities.

pub mod chat_listing;

pub use chat_listing::{assemble, rank, ChatActivity};
