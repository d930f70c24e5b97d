//! # erine-cache
//!
//! Cache store implementations for the Erine fan site. Supports two modes:
//!
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//!   with per-entry TTLs, plus [dashmap](https://crates.io/crates/dashmap)
//!   for the tag-index sets
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. The memory
//! provider doubles as the fake store for tests.

#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
