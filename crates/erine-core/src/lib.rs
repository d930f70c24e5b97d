//! # erine-core
//!
//! Core crate for the Erine fan site. Contains configuration schemas,
//! the cache store trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Erine crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
