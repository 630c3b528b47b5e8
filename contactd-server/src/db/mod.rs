//! Database layer - connection pool, schema setup, and the contact repository
//!
//! # Design Principles
//!
//! - One bounded pool for the process lifetime, shared through AppState
//! - Parameterized statements only - no string-built SQL
//! - Identity and created_at are assigned by the store, never the application

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{Contact, ContactRepo, DbError};
