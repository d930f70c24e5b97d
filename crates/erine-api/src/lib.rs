//! # erine-api
//!
//! HTTP API layer for the Erine fan site built on Axum.
//!
//! Exposes the REST endpoints the cache gateway consumes: profile,
//! gallery, events, guestbook messages, and a health probe. Responses are
//! raw JSON payloads in camelCase; errors carry a `message` field the
//! gateway surfaces to callers.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
