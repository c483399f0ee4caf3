//! Data Transfer Objects
//!
//! Wire shapes shared by every endpoint. Request bodies are the domain
//! request types themselves (`CreateUser`, `CreateChat`, ...).

pub mod response;

pub use response::ApiResponse;
