//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection and migrations (PostgreSQL)
//! - Persistence adapters (PostgreSQL and in-memory)
//! - Prometheus metrics

pub mod database;
pub mod memory;
pub mod metrics;
pub mod repositories;
