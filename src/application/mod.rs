//! Application Layer
//!
//! Validators, the services composing them over persistence adapters, and
//! the response envelope.

pub mod dto;
pub mod services;
pub mod validators;
