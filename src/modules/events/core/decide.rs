// Pure decision functions for event mutations.
//
// Responsibilities
// - Check the caller against the host and attendee rules.
// - Return the next state of the event, or the rule that was broken.
// - Never perform input or output.

use crate::modules::events::core::event::{Event, EventStatus, Participant};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Event is already full")]
    EventFull,
    #[error("Already joined this event")]
    AlreadyJoined,
    #[error("Host cannot leave the event")]
    HostCannotLeave,
    #[error("Not an attendee of this event")]
    NotAnAttendee,
    #[error("Not authorized to update this event")]
    NotHostForUpdate,
    #[error("Not authorized to delete this event")]
    NotHostForDelete,
}

/// Partial update. Omitted fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub max_attendees: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub entry_fee: Option<f64>,
    pub status: Option<EventStatus>,
}

/// Capacity is checked before membership.
pub fn decide_join(event: &Event, attendee: Participant) -> Result<Event, DecideError> {
    if event.is_full() {
        return Err(DecideError::EventFull);
    }
    if event.has_attendee(&attendee.id) {
        return Err(DecideError::AlreadyJoined);
    }
    let mut next = event.clone();
    next.attendees.push(attendee);
    Ok(next)
}

pub fn decide_leave(event: &Event, user_id: &str) -> Result<Event, DecideError> {
    if event.is_hosted_by(user_id) {
        return Err(DecideError::HostCannotLeave);
    }
    if !event.has_attendee(user_id) {
        return Err(DecideError::NotAnAttendee);
    }
    let mut next = event.clone();
    next.attendees.retain(|a| a.id != user_id);
    Ok(next)
}

pub fn decide_update(
    event: &Event,
    user_id: &str,
    changes: EventChanges,
) -> Result<Event, DecideError> {
    if !event.is_hosted_by(user_id) {
        return Err(DecideError::NotHostForUpdate);
    }
    let mut next = event.clone();
    if let Some(title) = changes.title {
        next.title = title;
    }
    if let Some(description) = changes.description {
        next.description = description;
    }
    if let Some(location) = changes.location {
        next.location = location;
    }
    if let Some(date) = changes.date {
        next.date = date;
    }
    if let Some(max) = changes.max_attendees {
        next.max_attendees = max;
    }
    if let Some(tags) = changes.tags {
        next.tags = tags;
    }
    if let Some(fee) = changes.entry_fee {
        next.entry_fee = fee;
    }
    if let Some(status) = changes.status {
        next.status = status;
    }
    Ok(next)
}

pub fn decide_delete(event: &Event, user_id: &str) -> Result<(), DecideError> {
    if !event.is_hosted_by(user_id) {
        return Err(DecideError::NotHostForDelete);
    }
    Ok(())
}
