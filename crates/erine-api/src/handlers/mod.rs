//! HTTP request handlers, one module per resource.

pub mod event;
pub mod gallery;
pub mod health;
pub mod message;
pub mod profile;
