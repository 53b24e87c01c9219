//! jobskills — job position → skills catalog over an API-key gated HTTP API.
//!
//! This library crate re-exports modules so integration tests
//! (under `tests/`) can access them.

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod keys;
