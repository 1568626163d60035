use std::sync::Arc;

use crate::modules::events::core::decide::{EventChanges, decide_update};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::retry::with_retry;

pub struct UpdateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl UpdateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(
        &self,
        event_id: &str,
        user_id: &str,
        changes: EventChanges,
    ) -> Result<Event, ApplicationError> {
        let changes = &changes;
        with_retry(event_id, move || async move {
            let loaded = self
                .events
                .load(event_id)
                .await?
                .ok_or(ApplicationError::NotFound)?;
            let next = decide_update(&loaded.event, user_id, changes.clone())?;
            self.events.save(next.clone(), loaded.version).await?;
            tracing::info!(event_id, status = %next.status, "event updated");
            Ok::<Event, ApplicationError>(next)
        })
        .await
    }
}

#[cfg(test)]
mod update_event_handler_tests {
    use super::*;
    use crate::modules::events::adapters::outbound::events_in_memory::InMemoryEvents;
    use crate::modules::events::core::decide::DecideError;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_persist_the_host_changes() {
        let events = Arc::new(InMemoryEvents::seeded());
        let handler = UpdateEventHandler::new(events.clone());
        let updated = handler
            .handle(
                "1",
                "1",
                EventChanges {
                    location: Some("Blue Tokai, Mumbai".into()),
                    ..EventChanges::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.location, "Blue Tokai, Mumbai");
        let stored = events.load("1").await.unwrap().unwrap();
        assert_eq!(stored.event, updated);
        assert_eq!(stored.version, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_non_hosts() {
        let handler = UpdateEventHandler::new(Arc::new(InMemoryEvents::seeded()));
        let err = handler
            .handle("2", "1", EventChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(DecideError::NotHostForUpdate)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_missing_events() {
        let handler = UpdateEventHandler::new(Arc::new(InMemoryEvents::seeded()));
        let err = handler
            .handle("42", "1", EventChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound));
    }
}
