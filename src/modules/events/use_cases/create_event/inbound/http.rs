use axum::{Json, extract::State};
use serde::Deserialize;
use validator::Validate;

use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::core::validation::{FieldError, is_iso8601};
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shared::infrastructure::http::json::{CheckedJson, FieldChecks};
use crate::shell::state::EventsState;

pub const DATE_REQUIRED: &str = "Date is required";

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Description is required"),
        length(min = 1, message = "Description is required")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Location is required"),
        length(min = 1, message = "Location is required")
    )]
    pub location: Option<String>,
    pub date: Option<String>,
    #[validate(
        required(message = "Maximum attendees must be a positive number"),
        range(
            min = 1,
            max = 4_294_967_295i64,
            message = "Maximum attendees must be a positive number"
        )
    )]
    pub max_attendees: Option<i64>,
    #[validate(required(message = "Tags must be an array"))]
    pub tags: Option<Vec<String>>,
    #[validate(range(min = 0.0, message = "Entry fee cannot be negative"))]
    pub entry_fee: Option<f64>,
}

/// `date` must be ISO-8601; when `required`, it must also be present.
pub fn check_date(date: Option<&str>, required: bool) -> Vec<FieldError> {
    match date {
        Some(raw) if is_iso8601(raw) => Vec::new(),
        Some(raw) => vec![FieldError::new("date", DATE_REQUIRED).with_value(raw.into())],
        None if required => vec![FieldError::new("date", DATE_REQUIRED)],
        None => Vec::new(),
    }
}

impl FieldChecks for CreateEventBody {
    fn field_checks(&self) -> Vec<FieldError> {
        check_date(self.date.as_deref(), true)
    }
}

impl CreateEventBody {
    fn into_command(self) -> Result<CreateEvent, ApiError> {
        let max_attendees = self
            .max_attendees
            .and_then(|max| u32::try_from(max).ok())
            .ok_or_else(|| anyhow::anyhow!("maxAttendees passed validation but is out of range"))?;
        Ok(CreateEvent {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            max_attendees,
            tags: self.tags.unwrap_or_default(),
            entry_fee: self.entry_fee.unwrap_or(0.0),
        })
    }
}

pub async fn handle(
    State(state): State<EventsState>,
    caller: AuthenticatedUser,
    CheckedJson(body): CheckedJson<CreateEventBody>,
) -> Result<Json<Event>, ApiError> {
    let command = body.into_command()?;
    let event = state
        .create_handler
        .handle(&caller.user_id, command)
        .await?;
    Ok(Json(event))
}
