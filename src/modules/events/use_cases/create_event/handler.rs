use std::sync::Arc;
use uuid::Uuid;

use crate::modules::events::core::event::{Event, EventStatus};
use crate::modules::events::core::ports::{EventRepository, UserDirectory};
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::participants::resolve_participant;

pub struct CreateEventHandler {
    events: Arc<dyn EventRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl CreateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { events, directory }
    }

    /// The caller hosts the new event and takes its first seat.
    pub async fn handle(
        &self,
        host_id: &str,
        command: CreateEvent,
    ) -> Result<Event, ApplicationError> {
        let host = resolve_participant(&*self.directory, host_id).await;
        let event = Event {
            id: Uuid::now_v7().to_string(),
            title: command.title,
            description: command.description,
            host: host.clone(),
            location: command.location,
            date: command.date,
            max_attendees: command.max_attendees,
            attendees: vec![host],
            tags: command.tags,
            entry_fee: command.entry_fee,
            status: EventStatus::Upcoming,
        };
        self.events.insert(event.clone()).await?;
        tracing::info!(event_id = %event.id, host_id, "event created");
        Ok(event)
    }
}

#[cfg(test)]
mod create_event_handler_tests {
    use super::*;
    use crate::modules::events::adapters::outbound::events_in_memory::InMemoryEvents;
    use crate::modules::events::adapters::outbound::user_directory::StaticUserDirectory;
    use crate::modules::events::core::event::Participant;
    use crate::modules::events::use_cases::participants::FALLBACK_DISPLAY_NAME;
    use rstest::{fixture, rstest};
    use std::collections::HashMap;

    #[fixture]
    fn command() -> CreateEvent {
        CreateEvent {
            title: "Board Game Night".into(),
            description: "Catan and snacks".into(),
            location: "Pune".into(),
            date: "2025-05-01T18:00:00Z".into(),
            max_attendees: 6,
            tags: vec!["Games".into()],
            entry_fee: 0.0,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_seat_the_host_first(command: CreateEvent) {
        let events = Arc::new(InMemoryEvents::new());
        let directory = Arc::new(StaticUserDirectory::new(HashMap::from([(
            "9".to_string(),
            "Kabir".to_string(),
        )])));
        let event = CreateEventHandler::new(events.clone(), directory)
            .handle("9", command)
            .await
            .unwrap();

        assert_eq!(event.host, Participant::new("9", "Kabir"));
        assert_eq!(event.attendees, vec![Participant::new("9", "Kabir")]);
        assert_eq!(event.status, EventStatus::Upcoming);
        let stored = events.load(&event.id).await.unwrap().unwrap();
        assert_eq!(stored.event, event);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fall_back_to_the_placeholder_host_name(command: CreateEvent) {
        let event = CreateEventHandler::new(
            Arc::new(InMemoryEvents::new()),
            Arc::new(StaticUserDirectory::default()),
        )
        .handle("1", command)
        .await
        .unwrap();
        assert_eq!(event.host.name, FALLBACK_DISPLAY_NAME);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_repository_failures(command: CreateEvent) {
        let mut events = InMemoryEvents::new();
        events.toggle_offline();
        let err = CreateEventHandler::new(Arc::new(events), Arc::new(StaticUserDirectory::default()))
            .handle("1", command)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Repository(_)));
    }
}
