//! # erine-entity
//!
//! Flat domain records for the Erine fan site. All records serialize to the
//! camelCase JSON shapes the page components consume; database column names
//! stay snake_case via sqlx.

pub mod event;
pub mod gallery;
pub mod message;
pub mod profile;
pub mod schedule;

pub use event::{CreateEvent, Event};
pub use gallery::{GalleryCategory, GalleryImage};
pub use message::{CreateMessage, Message};
pub use profile::{CreateProfile, Profile};
pub use schedule::ScheduleEntry;
