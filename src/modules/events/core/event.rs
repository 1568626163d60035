// Event aggregate.
//
// Responsibilities
// - Hold the meetup as clients see it: host, capacity, attendee list.
// - Answer the membership questions the decide functions ask.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub host: Participant,
    pub location: String,
    pub date: String,
    pub max_attendees: u32,
    pub attendees: Vec<Participant>,
    pub tags: Vec<String>,
    pub entry_fee: f64,
    pub status: EventStatus,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.attendees.len() >= self.max_attendees as usize
    }

    pub fn has_attendee(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|a| a.id == user_id)
    }

    pub fn is_hosted_by(&self, user_id: &str) -> bool {
        self.host.id == user_id
    }
}

pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Coffee & Conversation".into(),
            description:
                "Join us for a casual coffee meetup to discuss various topics and meet new people."
                    .into(),
            host: Participant::new("1", "Priya M."),
            location: "Brew Haven Café, Mumbai".into(),
            date: "2025-04-10T10:30:00Z".into(),
            max_attendees: 8,
            attendees: vec![
                Participant::new("1", "Priya M."),
                Participant::new("2", "Rahul S."),
            ],
            tags: vec!["Coffee".into(), "Casual".into(), "Networking".into()],
            entry_fee: 0.0,
            status: EventStatus::Upcoming,
        },
        Event {
            id: "2".into(),
            title: "Tech Enthusiasts Meetup".into(),
            description:
                "A gathering for tech enthusiasts to discuss the latest trends and innovations."
                    .into(),
            host: Participant::new("2", "Rahul S."),
            location: "Digital Hub, Bangalore".into(),
            date: "2025-04-11T14:00:00Z".into(),
            max_attendees: 10,
            attendees: vec![
                Participant::new("2", "Rahul S."),
                Participant::new("3", "Ananya K."),
            ],
            tags: vec!["Technology".into(), "Networking".into(), "Learning".into()],
            entry_fee: 100.0,
            status: EventStatus::Upcoming,
        },
    ]
}
