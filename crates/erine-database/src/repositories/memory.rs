//! In-memory repositories.
//!
//! Back the server when no database URL is configured (demo mode) and
//! serve as fakes in router tests. Data lives behind async RwLocks and
//! vanishes on restart.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use erine_core::error::AppError;
use erine_core::result::AppResult;
use erine_entity::{
    CreateEvent, CreateMessage, CreateProfile, Event, GalleryImage, Message, Profile,
};

use super::{EventRepository, GalleryRepository, MessageRepository, ProfileRepository};

/// In-memory profile repository. Holds at most one profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileRepository {
    profile: Arc<RwLock<Option<Profile>>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the profile, for demo mode and tests.
    pub async fn seed(&self, profile: Profile) {
        *self.profile.write().await = Some(profile);
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find(&self) -> AppResult<Option<Profile>> {
        Ok(self.profile.read().await.clone())
    }

    async fn create(&self, profile: &CreateProfile) -> AppResult<Profile> {
        let mut slot = self.profile.write().await;
        if slot.is_some() {
            return Err(AppError::conflict("Profile already exists"));
        }
        let created = Profile {
            id: Uuid::new_v4(),
            name: profile.name.clone(),
            stage_name: profile.stage_name.clone(),
            bio: profile.bio.clone(),
            generation: profile.generation.clone(),
            birth_date: profile.birth_date.clone(),
            position: profile.position.clone(),
            join_date: profile.join_date.clone(),
            image_cover: profile.image_cover.clone(),
            image_profile: profile.image_profile.clone(),
            image_portrait: profile.image_portrait.clone(),
        };
        *slot = Some(created.clone());
        Ok(created)
    }
}

/// In-memory gallery repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryGalleryRepository {
    images: Arc<RwLock<Vec<GalleryImage>>>,
}

impl MemoryGalleryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the gallery, for demo mode and tests.
    pub async fn seed(&self, images: Vec<GalleryImage>) {
        *self.images.write().await = images;
    }
}

#[async_trait]
impl GalleryRepository for MemoryGalleryRepository {
    async fn list(&self) -> AppResult<Vec<GalleryImage>> {
        let mut images = self.images.read().await.clone();
        images.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(images)
    }
}

/// In-memory event repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate events, for demo mode and tests.
    pub async fn seed(&self, events: Vec<Event>) {
        *self.events.write().await = events;
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn list(&self) -> AppResult<Vec<Event>> {
        let mut events = self.events.read().await.clone();
        events.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(events)
    }

    async fn create(&self, event: &CreateEvent) -> AppResult<Event> {
        let created = Event {
            id: Uuid::new_v4(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            location: event.location.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            image_url: event.image_url.clone(),
        };
        self.events.write().await.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|event| event.id != id);
        Ok(events.len() < before)
    }
}

/// In-memory guestbook repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryMessageRepository {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn list(&self) -> AppResult<Vec<Message>> {
        let mut messages = self.messages.read().await.clone();
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(messages)
    }

    async fn create(&self, message: &CreateMessage) -> AppResult<Message> {
        let created = Message {
            id: Uuid::new_v4(),
            name: message.name.clone(),
            message: message.message.clone(),
            date: Utc::now(),
        };
        self.messages.write().await.push(created.clone());
        Ok(created)
    }
}
