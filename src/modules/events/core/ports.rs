use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::Event;

#[derive(Debug, Clone, PartialEq)]
pub struct VersionedEvent {
    pub event: Event,
    pub version: u64,
}

#[derive(Debug, Error)]
pub enum EventRepositoryError {
    #[error("version mismatch for event {id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("event {0} not found")]
    NotFound(String),

    #[error("event {0} already exists")]
    Duplicate(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Writes carry the version they were decided against and fail on a stale one.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError>;
    async fn load(&self, id: &str) -> Result<Option<VersionedEvent>, EventRepositoryError>;
    async fn insert(&self, event: Event) -> Result<(), EventRepositoryError>;
    async fn save(&self, event: Event, expected_version: u64) -> Result<u64, EventRepositoryError>;
    async fn remove(&self, id: &str, expected_version: u64) -> Result<(), EventRepositoryError>;
}

/// Display names for user ids, owned by the user service.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn display_name(&self, user_id: &str) -> anyhow::Result<Option<String>>;
}
