//! Repository traits and implementations for the Erine entities.
//!
//! Each entity gets a small trait consumed by the HTTP handlers as a
//! trait object. The Postgres implementations live next to the traits;
//! the in-memory implementations back the server when no database is
//! configured and double as fakes in tests.

pub mod event;
pub mod gallery;
pub mod memory;
pub mod message;
pub mod profile;

pub use event::{EventRepository, PgEventRepository};
pub use gallery::{GalleryRepository, PgGalleryRepository};
pub use memory::{
    MemoryEventRepository, MemoryGalleryRepository, MemoryMessageRepository,
    MemoryProfileRepository,
};
pub use message::{MessageRepository, PgMessageRepository};
pub use profile::{PgProfileRepository, ProfileRepository};
