//! Validators
//!
//! Decorators that run an ordered pipeline of field checks before handing a
//! request to the capability they wrap. Each validator implements the same
//! repository trait as its inner value.

pub mod chat_validator;
pub mod message_validator;
pub mod user_validator;

pub use chat_validator::ChatValidator;
pub use message_validator::MessageValidator;
pub use user_validator::UserValidator;
