//! Shared trait definitions.

pub mod cache;

pub use cache::CacheStore;
