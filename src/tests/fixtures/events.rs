// Shared test fixture for events.
// Compiled only under `cfg(test)`, exposed as `crate::tests::fixtures::events`.

use crate::modules::events::core::event::{Event, EventStatus, Participant};

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        let host = Participant::new("host-fixed-0001", "Fixture Host");
        Self {
            inner: Event {
                id: "event-fixed-0001".to_string(),
                title: "Fixture Meetup".to_string(),
                description: "A meetup used by tests".to_string(),
                host: host.clone(),
                location: "Somewhere central".to_string(),
                date: "2025-06-01T18:00:00Z".to_string(),
                max_attendees: 10,
                attendees: vec![host],
                tags: vec!["Testing".to_string()],
                entry_fee: 0.0,
                status: EventStatus::Upcoming,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    /// Sets the host only; the attendee list is left as is.
    pub fn host(mut self, v: Participant) -> Self {
        self.inner.host = v;
        self
    }

    pub fn max_attendees(mut self, v: u32) -> Self {
        self.inner.max_attendees = v;
        self
    }

    pub fn attendees(mut self, v: Vec<Participant>) -> Self {
        self.inner.attendees = v;
        self
    }

    pub fn status(mut self, v: EventStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_seat_the_host_by_default() {
        let event = EventBuilder::default().build();
        assert_eq!(event.attendees, vec![event.host.clone()]);
        assert_eq!(event.max_attendees, 10);
        assert_eq!(event.status, EventStatus::Upcoming);
    }

    #[rstest]
    fn it_should_override_fields_through_setters() {
        let event = EventBuilder::new()
            .id("e-1")
            .title("Chess")
            .host(Participant::new("h", "Host"))
            .attendees(vec![])
            .max_attendees(2)
            .status(EventStatus::Cancelled)
            .build();
        assert_eq!(event.id, "e-1");
        assert_eq!(event.title, "Chess");
        assert_eq!(event.host.id, "h");
        assert!(event.attendees.is_empty());
        assert_eq!(event.max_attendees, 2);
        assert_eq!(event.status, EventStatus::Cancelled);
    }
}
