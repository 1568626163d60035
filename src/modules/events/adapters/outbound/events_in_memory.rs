// In memory implementation of the EventRepository port.
//
// Purpose
// - Back the event service until a real database exists.
//
// Responsibilities
// - Keep events in insertion order, each with a version that bumps on every write.
// - Enforce optimistic concurrency by checking the expected version.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::events::core::event::{Event, seed_events};
use crate::modules::events::core::ports::{
    EventRepository, EventRepositoryError, VersionedEvent,
};

#[derive(Default)]
pub struct InMemoryEvents {
    rows: RwLock<Vec<VersionedEvent>>,
    is_offline: bool,
}

impl InMemoryEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            rows: RwLock::new(
                events
                    .into_iter()
                    .map(|event| VersionedEvent { event, version: 1 })
                    .collect(),
            ),
            is_offline: false,
        }
    }

    pub fn seeded() -> Self {
        Self::with_events(seed_events())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventRepositoryError> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Event repository offline").into());
        }
        Ok(())
    }
}

fn check_version(row: &VersionedEvent, expected: u64) -> Result<(), EventRepositoryError> {
    if row.version != expected {
        return Err(EventRepositoryError::VersionMismatch {
            id: row.event.id.clone(),
            expected,
            actual: row.version,
        });
    }
    Ok(())
}

#[async_trait]
impl EventRepository for InMemoryEvents {
    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.iter().map(|row| row.event.clone()).collect())
    }

    async fn load(&self, id: &str) -> Result<Option<VersionedEvent>, EventRepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.iter().find(|row| row.event.id == id).cloned())
    }

    async fn insert(&self, event: Event) -> Result<(), EventRepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.iter().any(|row| row.event.id == event.id) {
            return Err(EventRepositoryError::Duplicate(event.id));
        }
        guard.push(VersionedEvent { event, version: 1 });
        Ok(())
    }

    async fn save(&self, event: Event, expected_version: u64) -> Result<u64, EventRepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let row = guard
            .iter_mut()
            .find(|row| row.event.id == event.id)
            .ok_or_else(|| EventRepositoryError::NotFound(event.id.clone()))?;
        check_version(row, expected_version)?;
        row.event = event;
        row.version += 1;
        Ok(row.version)
    }

    async fn remove(&self, id: &str, expected_version: u64) -> Result<(), EventRepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let index = guard
            .iter()
            .position(|row| row.event.id == id)
            .ok_or_else(|| EventRepositoryError::NotFound(id.to_string()))?;
        check_version(&guard[index], expected_version)?;
        guard.remove(index);
        Ok(())
    }
}
