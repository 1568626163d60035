use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::http::errors::ApiError;
use crate::shell::state::EventsState;

pub async fn list(State(state): State<EventsState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.events.list().await.map_err(ApplicationError::from)?;
    Ok(Json(events))
}

pub async fn by_id(
    State(state): State<EventsState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let loaded = state
        .events
        .load(&id)
        .await
        .map_err(ApplicationError::from)?
        .ok_or(ApplicationError::NotFound)?;
    Ok(Json(loaded.event))
}
