use std::sync::Arc;

use crate::modules::events::core::decide::{decide_join, decide_leave};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::{EventRepository, UserDirectory};
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::participants::resolve_participant;
use crate::modules::events::use_cases::retry::with_retry;

pub struct AttendanceHandler {
    events: Arc<dyn EventRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl AttendanceHandler {
    pub fn new(events: Arc<dyn EventRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { events, directory }
    }

    pub async fn join(&self, event_id: &str, user_id: &str) -> Result<Event, ApplicationError> {
        let attendee = resolve_participant(&*self.directory, user_id).await;
        let attendee = &attendee;
        with_retry(event_id, move || async move {
            let loaded = self
                .events
                .load(event_id)
                .await?
                .ok_or(ApplicationError::NotFound)?;
            let next = decide_join(&loaded.event, attendee.clone())?;
            self.events.save(next.clone(), loaded.version).await?;
            tracing::info!(event_id, user_id, "attendee joined");
            Ok::<Event, ApplicationError>(next)
        })
        .await
    }

    pub async fn leave(&self, event_id: &str, user_id: &str) -> Result<Event, ApplicationError> {
        with_retry(event_id, move || async move {
            let loaded = self
                .events
                .load(event_id)
                .await?
                .ok_or(ApplicationError::NotFound)?;
            let next = decide_leave(&loaded.event, user_id)?;
            self.events.save(next.clone(), loaded.version).await?;
            tracing::info!(event_id, user_id, "attendee left");
            Ok::<Event, ApplicationError>(next)
        })
        .await
    }
}
