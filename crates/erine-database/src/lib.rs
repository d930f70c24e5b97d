//! # erine-database
//!
//! PostgreSQL connection management and repository implementations for
//! the Erine fan-site entities, plus in-memory repositories used when no
//! database is configured and in tests.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
