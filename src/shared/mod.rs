//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod string_id;
pub mod validation;
