//! API Tests

mod chats_tests;
mod decoding_tests;
mod health_tests;
mod messages_tests;
mod scenario_tests;
mod users_tests;
