use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::modules::events::core::decide::EventChanges;
use crate::modules::events::core::event::{Event, EventStatus};
use crate::modules::events::use_cases::create_event::inbound::http::check_date;
use crate::shared::core::validation::FieldError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shared::infrastructure::http::json::{CheckedJson, FieldChecks};
use crate::shell::state::EventsState;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventBody {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: Option<String>,
    pub date: Option<String>,
    #[validate(range(
        min = 1,
        max = 4_294_967_295i64,
        message = "Maximum attendees must be a positive number"
    ))]
    pub max_attendees: Option<i64>,
    pub tags: Option<Vec<String>>,
    #[validate(range(min = 0.0, message = "Entry fee cannot be negative"))]
    pub entry_fee: Option<f64>,
    pub status: Option<EventStatus>,
}

impl FieldChecks for UpdateEventBody {
    fn field_checks(&self) -> Vec<FieldError> {
        check_date(self.date.as_deref(), false)
    }
}

impl From<UpdateEventBody> for EventChanges {
    fn from(body: UpdateEventBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            location: body.location,
            date: body.date,
            max_attendees: body.max_attendees.and_then(|max| u32::try_from(max).ok()),
            tags: body.tags,
            entry_fee: body.entry_fee,
            status: body.status,
        }
    }
}

pub async fn handle(
    State(state): State<EventsState>,
    Path(id): Path<String>,
    caller: AuthenticatedUser,
    CheckedJson(body): CheckedJson<UpdateEventBody>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .update_handler
        .handle(&id, &caller.user_id, body.into())
        .await?;
    Ok(Json(event))
}
