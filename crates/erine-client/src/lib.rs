//! # erine-client
//!
//! Typed HTTP client for the Erine REST API with tag-based cache
//! invalidation layered on a remote [`CacheStore`].
//!
//! Every cache-eligible read derives a key and a tag from the request
//! shape, serves hits straight from the store, and on a miss fetches,
//! caches, and indexes the result so that a whole resource can later be
//! invalidated in one call. Writes bypass the cache and revalidate the
//! affected tag.
//!
//! The client takes its cache store by constructor injection so tests can
//! substitute an in-memory store and a mock HTTP origin; there is no
//! process-wide state.
//!
//! [`CacheStore`]: erine_core::traits::cache::CacheStore

pub mod client;
pub mod keys;
pub mod models;
pub mod request;
mod schedule;

pub use client::ErineClient;
pub use models::{EventRecord, HealthStatus, MessageReceipt};
pub use request::{RequestConfig, RequestOptions, TagPattern};
