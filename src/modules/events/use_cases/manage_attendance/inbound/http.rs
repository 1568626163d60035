use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shell::state::EventsState;

#[derive(Serialize)]
pub struct AttendanceResponse {
    pub msg: &'static str,
    pub event: Event,
}

pub async fn join(
    State(state): State<EventsState>,
    Path(id): Path<String>,
    caller: AuthenticatedUser,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let event = state.attendance_handler.join(&id, &caller.user_id).await?;
    Ok(Json(AttendanceResponse {
        msg: "Successfully joined the event",
        event,
    }))
}

pub async fn leave(
    State(state): State<EventsState>,
    Path(id): Path<String>,
    caller: AuthenticatedUser,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let event = state.attendance_handler.leave(&id, &caller.user_id).await?;
    Ok(Json(AttendanceResponse {
        msg: "Successfully left the event",
        event,
    }))
}
