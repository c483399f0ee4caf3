//! # Chat Backend Library
//!
//! A messaging backend: users, chats grouping users, and messages posted
//! to chats, served as JSON over HTTP with PostgreSQL storage.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, request types, repository traits and the
//!   chat-listing order
//! - **Application Layer**: Validators decorating repositories, and the
//!   services composing them
//! - **Infrastructure Layer**: PostgreSQL and in-memory adapters, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! Every capability is one trait implemented three times over: by the
//! adapter, by the validator wrapping any implementation, and by the service
//! wrapping the validator.
//!
//! ## Module Structure
//!
//! ```text
//! chat_backend/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits, chat listing
//! +-- application/    Validators, services, response envelope
//! +-- infrastructure/ Database, adapters, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors, validation pipeline, string ids
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Validation and services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
